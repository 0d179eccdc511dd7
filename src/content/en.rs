use super::*;

const fn t(text: &'static str) -> Line {
    Line::text(text)
}

const B: Line = Line::BLANK;

fn command_not_found(cmd: &str) -> String {
    format!("Command not found: {}. Type 'help' for available commands.", cmd)
}

fn ls_not_found(target: &str) -> String {
    format!("ls: cannot access '{}': No such file or directory", target)
}

fn cd_not_found(dir: &str) -> String {
    format!("cd: no such file or directory: {}", dir)
}

fn cat_not_found(filename: &str) -> String {
    format!("cat: {}: No such file or directory", filename)
}

fn blog_not_found(date: &str) -> String {
    format!("No blog post found for date: {}", date)
}

fn current_language(current: Locale) -> String {
    format!("Current language: {}. Usage: lang en | lang it", current)
}

fn step_indicator(current: usize, total: usize) -> String {
    format!("Step {} of {}", current, total)
}

fn language_option_aria(option: Locale, active: bool) -> String {
    let name = match option {
        Locale::En => "English",
        Locale::It => "Italian",
    };
    if active {
        format!("Tour language {} selected", name)
    } else {
        format!("Switch tour language to {}", name)
    }
}

fn skip_aria(current: usize, total: usize) -> String {
    format!("Skip tour after step {} of {}", current, total)
}

fn next_aria(current: usize, total: usize) -> String {
    format!("Go to step {} of {}", total.min(current + 1), total)
}

fn back_aria(current: usize, total: usize) -> String {
    format!("Go back to step {} of {}", current.saturating_sub(1).max(1), total)
}

fn done_aria(current: usize, total: usize) -> String {
    format!("Close tour at step {} of {}", current, total)
}

pub static EN: ContentTable = ContentTable {
    meta: MetaCopy {
        title: "Niccolò Maffioli | Web Developer",
        description: "Portfolio website of Niccolò Maffioli, front-end developer specializing in React, TypeScript, and Tailwind.",
        og_title: "Niccolò Maffioli | Full-Stack Developer",
    },
    terminal: TerminalUiCopy {
        hidden_message: "Terminal hidden. press the button to reopen it.",
        reopen_label: "Reopen terminal",
        minimized_message: "Terminal minimized. Press restore to continue.",
        restore_label: "Restore",
        placeholder: "Type a command...",
        suggestions_label: "Suggestions:",
    },
    header: HeaderCopy {
        title: "Terminal - Portfolio",
        close_aria: "Close terminal",
        minimize_aria: ToggleAria {
            default: "Minimize terminal window",
            active: "Restore terminal window",
        },
        compact_aria: ToggleAria {
            default: "Switch to compact terminal size",
            active: "Restore full terminal size",
        },
    },
    onboarding: OnboardingCopy {
        step_indicator,
        language_label: "Language",
        skip_label: "Skip tour",
        next_label: "Next",
        back_label: "Back",
        done_label: "Got it",
        continue_hint: "Press Enter to continue • Esc to skip",
        close_hint: "Press Enter to close • Esc to skip",
        language_option_aria,
        controls_aria: ControlsAria {
            skip: skip_aria,
            next: next_aria,
            back: back_aria,
            done: done_aria,
        },
        steps: [
            StepCopy {
                title: "Open the quick menu",
                body: "Use the button on the right side of the top bar to jump straight to each section without typing commands.",
                tips: &[],
            },
            StepCopy {
                title: "Run your first command",
                body: "In the prompt below type `help` to see the available commands, or `about` to learn more about my background.",
                tips: &["↑ / ↓ to browse history", "`tab` to auto-complete"],
            },
        ],
    },
    commands: CommandCopy {
        welcome: Variants {
            desktop: &[
                B,
                t("┌─ Full Stack Developer Portfolio Terminal ─┐"),
                t("│                                           │"),
                t("│  Welcome to my interactive portfolio!     │"),
                t("│                                           │"),
                t("│  Type \"help\" to see available commands    │"),
                t("│  Navigate like a real terminal            │"),
                t("│                                           │"),
                t("└───────────────────────────────────────────────┘"),
                B,
                t("System initialized. Ready for commands..."),
                B,
            ],
            mobile: &[
                t("Full Stack Developer Portfolio Terminal"),
                t("Welcome to my interactive portfolio!"),
                t("  "),
                t("Type \"help\" to see available commands"),
                t("Navigate like a real terminal"),
                t("  "),
                t("System initialized. Ready for commands..."),
            ],
        },
        language: LanguageCopy {
            changed: "Language changed to English",
            current: current_language,
            unsupported: "Language not supported. Use: lang en | lang it",
        },
        help: Variants {
            desktop: &[
                B,
                t("Available Commands:"),
                B,
                t("┌─ Portfolio Commands ───────────────────────────┐"),
                t("│  about      - Learn about me                 │"),
                t("│  skills     - View my technical skills       │"),
                t("│  projects   - See my latest projects         │"),
                t("│  experience - Check my work experience       │"),
                t("│  education  - View my educational background │"),
                t("│  contact    - Get my contact information     │"),
                t("└──────────────────────────────────────────────────┘"),
                B,
                t("┌─ Terminal Commands ──────────────────────────┐"),
                t("│  ls         - List files and directories   │"),
                t("│  cd         - Change directory             │"),
                t("│  cat        - Display file contents        │"),
                t("│  pwd        - Show current directory       │"),
                t("│  whoami     - Display user information     │"),
                t("│  date       - Show current date/time       │"),
                t("│  tree       - Display directory tree       │"),
                t("│  clear      - Clear terminal screen        │"),
                t("│  lang       - Change language (en|it)      │"),
                t("│  help       - Show this help message       │"),
                t("└────────────────────────────────────────────────┘"),
                B,
                t("Tip: Use Tab for auto-completion and ↑/↓ for command history"),
                B,
            ],
            mobile: &[
                B,
                t("Available Commands:"),
                B,
                t("Portfolio Commands:"),
                t("  • about      - Learn about me"),
                t("  • skills     - View my technical skills"),
                t("  • projects   - See my latest projects"),
                t("  • experience - Check my work experience"),
                t("  • education  - View my educational background"),
                t("  • contact    - Get my contact information"),
                t("  • blog       - My last articles"),
                B,
                t("Terminal Commands:"),
                t("  • ls         - List files and directories"),
                t("  • cd         - Change directory"),
                t("  • cat        - Display file contents"),
                t("  • pwd        - Show current directory"),
                t("  • whoami     - Display user information"),
                t("  • date       - Show current date/time"),
                t("  • tree       - Display directory tree"),
                t("  • clear      - Clear terminal screen"),
                t("  • lang       - Change language (en|it)"),
                t("  • help       - Show this help message"),
                B,
                t("Tip: Use Tab for auto-completion and ↑/↓ for command history"),
                B,
            ],
        },
        about: &[
            B,
            t("About Me"),
            t("═══════════"),
            B,
            Line::image(ImageId::Profile),
            t("Full Stack Developer with over 4 years of continuous learning and project development."),
            t("building scalable web applications and solving complex problems."),
            B,
            t("Specializations:"),
            t("  • Frontend: React, TypeScript, JavaScript, Html, CSS"),
            t("  • Backend: Node.js, Python, mySQL"),
            t("  • DevOps: CI/CD, Infrastructure as Code"),
            B,
            t("What drives me:"),
            t("  • Creating exceptional user experiences"),
            t("  • Writing clean, maintainable code"),
            t("  • Continuous learning and innovation"),
            B,
            t("Currently based in Milan, MI"),
            t("Open to remote opportunities worldwide"),
            B,
        ],
        skills: &[
            B,
            t("Technical Skills"),
            t("═══════════════════"),
            B,
            t("Frontend Development:"),
            t("  ▓▓▓░░ React.js             (Intermediate)"),
            t("  ▓▓▓▓░ TypeScript/JavaScript (Advanced)"),
            t("  ▓▓▓▓▓ HTML5/CSS3/SCSS      (Expert)"),
            t("  ▓▓▓▓░ Tailwind CSS         (Advanced)"),
            t("  ▓▓▓░░ Webpack/Vite         (Intermediate)"),
            B,
            t("Backend Development:"),
            t("  ▓▓▓░░ Node.js              (Intermediate)"),
            t("  ▓▓░░░ Python               (Basic)"),
            t("  ▓▓░░░ PHP                  (Basic)"),
            t("  ▓▓▓▓░ RESTful APIs         (Advanced)"),
            B,
            t("Databases:"),
            t("  ▓▓▓▓░ MySQL                (Advanced)"),
            t("  ▓░░░░ MongoDB              (Familiar)"),
            B,
            t("Cloud & DevOps:"),
            t("  ▓▓░░░ CI/CD Pipelines      (Basic)"),
            t("  ▓▓▓░░ GitHub Actions       (Intermediate)"),
            B,
            t("Tools & Others:"),
            t("  ▓▓▓▓░ Git/GitHub           (Advanced)"),
            t("  ▓▓▓▓▓ VS Code              (Expert)"),
            B,
        ],
        projects: &[
            B,
            t("Featured Projects"),
            t("═══════════════════"),
            B,
            t("1.  Movie app"),
            t("   ├─ Tech Stack: typescript, TMDB (API), Vercel (for deploy)"),
            t("   ├─ Features: minisimulation of Netflix, view list of popular series and view list of popular films"),
            Line::link("   ├─ ", "https://github.com/Niccolo-Maffioli/movie-niccolo-app", "Github"),
            Line::link("   └─ ", "https://movie-niccolo-app-1yzy.vercel.app/", "Movie app"),
            B,
            t("2. Portfolio Exlibris"),
            t("   ├─ Tech Stack: HTML, CSS, JAvascript, Netlify (for deploy)"),
            t("   ├─ Features: Portfolio template for Exlibris's employees"),
            Line::link("   ├─ ", "https://github.com/Niccolo-Maffioli/Exlibrisportfolio", "GitHub"),
            Line::link("   └─ ", "https://exlibris.link", "ExLibris portfolio template"),
            B,
            t("3. Blink"),
            t("   ├─ Tech Stack: HTML, CSS, Javascript, Netlify (for deploy)"),
            t("   ├─ Features: Movie site for MetaProject Mohole, "),
            Line::link("   ├─ ", "https://blinkprimevideo.netlify.app/", "Blink Movie App"),
            Line::link("   └─ ", "https://github.com/Niccolo-Maffioli/PrimeGift-More", "GitHub"),
            B,
        ],
        experience: &[
            B,
            t("Professional Experience"),
            t("═══════════════════════════"),
            B,
            t("2022 – 2023"),
            t("Freelance Collaboration"),
            t("   Exlibris.link Srl"),
            t("   ┌─ Designed book covers for digital publications (EPUB3 format)"),
            t("   ├─ Developed and managed a web-based intranet system for digital content archiving"),
            t("   └─ Built a web application for managing collaborators’ digital portfolios"),
            B,
            t("2021 – 2022"),
            t("Collaboration with R&D Department"),
            t("   Ste Industries Srl"),
            t("   ┌─ Created prototype logos for new product lines"),
            t("   └─ Designed marketing brochure mock-ups and visuals"),
            B,
        ],
        education: &[
            B,
            t("Education & Certifications"),
            t("═══════════════════════════"),
            B,
            t("Full Stack Developer with Cloud Technologies"),
            t("   ITS - Tech Talent Factory, Milano"),
            t("   2024 - 2026 | Final Grade: --"),
            B,
            t("Graphic Design"),
            t("   Mohole, Milano"),
            t("   2022 - 2024 | Final Grade: 27/30"),
            B,
            t("Web and Digital Media"),
            t("   Mohole, Milano"),
            t("   2020 - 2022 | Final Grade: 25/30"),
            B,
            t("Brera Art High School (Hajeck) – Architecture Program"),
            t("   Milan, Italy"),
            t("   2014 - 2019"),
            B,
            t("Continuous Learning:"),
            t("   • JavaScript & TypeScript Best Practices"),
            t("   • Responsive Design & Accessibility"),
            t("   • DevOps Foundations & CI/CD Principles"),
            t("   • Git & Version Control Workflows"),
            B,
            t("Achievements:"),
            t("   • Developed and deployed multiple personal projects"),
            t("   • Collaborated on design and development with peers during academic projects"),
            B,
        ],
        contact: &[
            B,
            t("Contact Information"),
            t("════════════════════"),
            B,
            t("Email:     nico.maffioli@gmail.com"),
            t("Phone:     +39 3348691322"),
            Line::link("", "https://niccolo.dev/", "Personal Porfolio"),
            t("Location:  Milano, MI"),
            B,
            t("Professional Links:"),
            Line::link("   ", "https://www.linkedin.com/in/niccolomaffioli/", "LinkedIn Profile"),
            Line::link("   ", "https://github.com/Niccolo-Maffioli/", "GitHub Profile"),
            B,
            t("Let's Connect!"),
            t("   I'm always open to discussing new opportunities,"),
            t("   collaborating on interesting projects, or just"),
            t("   having a chat about technology and development."),
            B,
            t("Availability: Open for new opportunities"),
            t("Rate: €80-120/hour (freelance)"),
            t("Timezone: CET/CEST (UTC+1/UTC+2)"),
            B,
        ],
        whoami: "Full Stack Developer",
        tree: &[
            B,
            t("Portfolio Directory Structure"),
            B,
            t("~/"),
            t("├── about.txt"),
            t("├── skills.json"),
            t("├── contact.txt"),
            t("├── projects/"),
            t("│   ├── --/"),
            t("└── experience/"),
            t("    ├── fullstack-dev.txt"),
            t("    └── frontend-dev.txt"),
            B,
        ],
        blog: BlogCopy {
            list: &[
                t("Personal Blog - Life beyond code"),
                B,
                t("Warning: this blog contains personal and medical reflections."),
                t("These are part of my story and go beyond my work."),
                t("Please read with respect and an open mind."),
                B,
                t("Entries:"),
                t("  • [2025-06-09] - The upcoming brain surgery"),
                t("  • [2025-04-15] - My internship and goals"),
                B,
                t("Use the command `blog <date>` to read a post."),
                t("   Example: `blog 2025-06-09`"),
            ],
            entries: &[
                (
                    "2025-06-09",
                    &[
                        t("[2025-06-09] - The upcoming brain surgery"),
                        B,
                        t("After over 12 years of living with epilepsy, I'm facing a crucial moment:"),
                        t("a high-risk surgery on the right insula. It's not my first operation,"),
                        t("but it might be the one with the most consequences — for better or worse."),
                        B,
                        t("The doctors aren't sure. It could be the right decision, or a mistake."),
                        t("But I’ve come this far with strength and patience."),
                        B,
                        t("Whatever happens, I'm proud of the person I've become."),
                    ],
                ),
                (
                    "2025-04-15",
                    &[
                        t("[2025-04-15] - My internship and goals"),
                        B,
                        t("Right now I’m doing an internship through school."),
                        t("It’s my final year and this stage marks a key step for my future."),
                        B,
                        t("I’m learning a lot, building real projects, and trying to balance"),
                        t("life, health, and education — and honestly, I'm doing okay."),
                    ],
                ),
            ],
            not_found: blog_not_found,
        },
        files: &[
            (
                "about.txt",
                &[
                    t("Full Stack Developer with 4+ years of education"),
                    t("Passionate about creating scalable web applications"),
                    t("Expert in React, Node.js, and cloud technologies"),
                ],
            ),
            (
                "contact.txt",
                &[
                    t("Email: nico.maffioli@gmail.com"),
                    t("LinkedIn: https://www.linkedin.com/in/niccolomaffioli/"),
                    t("GitHub: https://github.com/Niccolo-Maffioli"),
                ],
            ),
        ],
        errors: ErrorCopy {
            command_not_found,
            ls_not_found,
            cd_not_found,
            cat_missing_operand: "cat: missing file operand",
            cat_not_found,
        },
    },
};
