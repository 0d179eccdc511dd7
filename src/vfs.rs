use std::collections::BTreeMap;

pub const ROOT: &str = "~";

/// A directory of the portfolio tree. Children ending in `/` are
/// directories themselves.
#[derive(Debug, Clone)]
pub struct DirNode {
    pub children: Vec<&'static str>,
}

/// Read-only directory tree behind `ls` and `cd`.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    dirs: BTreeMap<&'static str, DirNode>,
}

impl VirtualFs {
    pub fn portfolio() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(
            ROOT,
            DirNode {
                children: vec!["about.txt", "skills.json", "projects/", "experience/", "contact.txt"],
            },
        );
        dirs.insert(
            "~/projects",
            DirNode {
                children: vec!["movie-app/", "portfolio-exlibris/", "blink/"],
            },
        );
        dirs.insert(
            "~/experience",
            DirNode {
                children: vec!["fullstack-dev.txt", "frontend-dev.txt"],
            },
        );
        Self { dirs }
    }

    pub fn dir(&self, path: &str) -> Option<&DirNode> {
        self.dirs.get(path)
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio()
    }
}

pub fn is_dir_entry(name: &str) -> bool {
    name.ends_with('/')
}

/// `current/arg`, normalized.
pub fn join(current: &str, arg: &str) -> String {
    normalize(&format!("{}/{}", current, arg))
}

/// Collapses repeated slashes and drops a trailing one. A bare `/`
/// means the root.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    if out == "/" || out.is_empty() {
        return ROOT.to_string();
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Resolves a command argument against `current`. Arguments starting
/// with `~` or `/` are taken from the root, `.` and `..` are understood,
/// anything else is appended.
pub fn resolve(current: &str, arg: &str) -> String {
    match arg {
        "." => normalize(current),
        ".." => parent(&normalize(current)),
        _ if arg.starts_with(ROOT) => normalize(arg),
        _ if arg.starts_with('/') => join(ROOT, arg),
        _ => join(current, arg),
    }
}

/// Drops the last segment, never going above the root.
pub fn parent(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((head, _)) if !head.is_empty() => head.to_string(),
        _ => ROOT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("~//projects"), "~/projects");
        assert_eq!(normalize("~/projects/"), "~/projects");
        assert_eq!(normalize("/"), "~");
        assert_eq!(normalize("~"), "~");
    }

    #[test]
    fn test_parent_floors_at_root() {
        assert_eq!(parent("~/projects"), "~");
        assert_eq!(parent("~/projects/blink"), "~/projects");
        assert_eq!(parent("~"), "~");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("~", "projects"), "~/projects");
        assert_eq!(resolve("~/projects", ".."), "~");
        assert_eq!(resolve("~/projects", "~/experience"), "~/experience");
        assert_eq!(resolve("~/projects", "~"), "~");
        assert_eq!(resolve("~/projects", "."), "~/projects");
        assert_eq!(resolve("~/projects", "/"), "~");
        assert_eq!(resolve("~/projects", "/experience/"), "~/experience");
    }

    #[test]
    fn test_portfolio_tree() {
        let fs = VirtualFs::portfolio();
        assert!(fs.is_dir("~"));
        assert!(fs.is_dir(&join("~", "projects")));
        assert!(fs.is_dir(&join("~", "experience/")));
        assert!(!fs.is_dir(&join("~", "about.txt")));
        assert_eq!(fs.dir("~").unwrap().children.len(), 5);
    }
}
