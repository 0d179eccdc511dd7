/// One parsed command line: `cd projects` -> program `cd`, args `["projects"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Lookup key in the registry. Verbs are case-insensitive.
    pub fn verb(&self) -> String {
        self.program.to_lowercase()
    }

    /// Program followed by its arguments, the shape handlers receive.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}
