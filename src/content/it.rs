use super::*;

const fn t(text: &'static str) -> Line {
    Line::text(text)
}

const B: Line = Line::BLANK;

fn command_not_found(cmd: &str) -> String {
    format!("Comando non trovato: {}. Digita 'help' per i comandi disponibili.", cmd)
}

fn ls_not_found(target: &str) -> String {
    format!("ls: impossibile accedere a '{}': File o directory non esistente", target)
}

fn cd_not_found(dir: &str) -> String {
    format!("cd: file o directory non esistente: {}", dir)
}

fn cat_not_found(filename: &str) -> String {
    format!("cat: {}: File o directory non esistente", filename)
}

fn blog_not_found(date: &str) -> String {
    format!("Nessun articolo trovato per la data: {}", date)
}

fn current_language(current: Locale) -> String {
    format!("Lingua attuale: {}. Usa: lang en | lang it", current)
}

fn step_indicator(current: usize, total: usize) -> String {
    format!("Step {} di {}", current, total)
}

fn language_option_aria(option: Locale, active: bool) -> String {
    let name = match option {
        Locale::En => "Inglese",
        Locale::It => "Italiano",
    };
    if active {
        format!("Lingua del tour {} selezionata", name)
    } else {
        format!("Imposta lingua del tour su {}", name)
    }
}

fn skip_aria(current: usize, total: usize) -> String {
    format!("Salta il tour dopo lo step {} di {}", current, total)
}

fn next_aria(current: usize, total: usize) -> String {
    format!("Vai allo step {} di {}", total.min(current + 1), total)
}

fn back_aria(current: usize, total: usize) -> String {
    format!("Torna allo step {} di {}", current.saturating_sub(1).max(1), total)
}

fn done_aria(current: usize, total: usize) -> String {
    format!("Chiudi il tour allo step {} di {}", current, total)
}

pub static IT: ContentTable = ContentTable {
    meta: MetaCopy {
        title: "Niccolò Maffioli | Web Developer",
        description: "Portfolio personale di Niccolò Maffioli, sviluppatore front-end specializzato in React, TypeScript e Tailwind.",
        og_title: "Niccolò Maffioli | Full-Stack Developer",
    },
    terminal: TerminalUiCopy {
        hidden_message: "Terminal nascosto. Premi per riaprirlo.",
        reopen_label: "Riapri terminale",
        minimized_message: "Terminal minimizzato. Premi ripristina per continuare.",
        restore_label: "Ripristina",
        placeholder: "Digita un comando...",
        suggestions_label: "Suggerimenti:",
    },
    header: HeaderCopy {
        title: "Terminal - Portfolio",
        close_aria: "Chiudi terminale",
        minimize_aria: ToggleAria {
            default: "Minimizza finestra terminale",
            active: "Ripristina finestra terminale",
        },
        compact_aria: ToggleAria {
            default: "Passa al terminale compatto",
            active: "Ripristina dimensione terminale",
        },
    },
    onboarding: OnboardingCopy {
        step_indicator,
        language_label: "Lingua",
        skip_label: "Salta tour",
        next_label: "Avanti",
        back_label: "Indietro",
        done_label: "Ho capito",
        continue_hint: "Premi Invio per continuare • Esc per saltare",
        close_hint: "Premi Invio per chiudere • Esc per saltare",
        language_option_aria,
        controls_aria: ControlsAria {
            skip: skip_aria,
            next: next_aria,
            back: back_aria,
            done: done_aria,
        },
        steps: [
            StepCopy {
                title: "Apri il menu rapido",
                body: "Usa il pulsante sulla destra della barra superiore per saltare direttamente alle sezioni del portfolio senza digitare comandi.",
                tips: &[],
            },
            StepCopy {
                title: "Digita un comando",
                body: "Nel prompt in basso scrivi `help` per vedere i comandi, oppure `about` per conoscere la mia storia.",
                tips: &["↑ / ↓ per scorrere la cronologia", "`tab` per completare"],
            },
        ],
    },
    commands: CommandCopy {
        welcome: Variants {
            desktop: &[
                B,
                t("┌─ Portfolio Terminale Sviluppatore Full Stack ─┐"),
                t("│                                                │"),
                t("│  Benvenuto nel mio portfolio interattivo!      │"),
                t("│                                                │"),
                t("│  Digita \"help\" per vedere i comandi disponibili│"),
                t("│  Naviga come un vero terminale                 │"),
                t("│                                                │"),
                t("└────────────────────────────────────────────────────┘"),
                B,
                t("Sistema inizializzato. Pronto per i comandi..."),
                B,
            ],
            mobile: &[
                t("Portfolio Terminale Sviluppatore Full Stack"),
                t("Benvenuto nel mio portfolio interattivo!"),
                t("  "),
                t("Digita \"help\" per vedere i comandi disponibili"),
                t("Naviga come un vero terminale"),
                t("  "),
                t("Sistema inizializzato. Pronto per i comandi..."),
            ],
        },
        language: LanguageCopy {
            changed: "Lingua cambiata in Italiano",
            current: current_language,
            unsupported: "Lingua non supportata. Usa: lang en | lang it",
        },
        help: Variants {
            desktop: &[
                B,
                t("Comandi Disponibili:"),
                B,
                t("┌─ Comandi Portfolio ───────────────────────────┐"),
                t("│  about      - Scopri di più su di me        │"),
                t("│  skills     - Visualizza le mie competenze  │"),
                t("│  projects   - Vedi i miei progetti recenti  │"),
                t("│  experience - Controlla la mia esperienza   │"),
                t("│  education  - Visualizza la mia formazione  │"),
                t("│  contact    - Ottieni le mie informazioni   │"),
                t("└─────────────────────────────────────────────────┘"),
                B,
                t("┌─ Comandi Terminale ───────────────────────────┐"),
                t("│  ls         - Elenca file e directory       │"),
                t("│  cd         - Cambia directory              │"),
                t("│  cat        - Mostra contenuto file         │"),
                t("│  pwd        - Mostra directory corrente     │"),
                t("│  whoami     - Mostra informazioni utente    │"),
                t("│  date       - Mostra data/ora corrente      │"),
                t("│  tree       - Mostra albero directory       │"),
                t("│  clear      - Pulisci schermo terminale     │"),
                t("│  lang       - Cambia lingua (en|it)         │"),
                t("│  help       - Mostra questo messaggio       │"),
                t("└─────────────────────────────────────────────────┘"),
                B,
                t("Suggerimento: Usa Tab per il completamento automatico e ↑/↓ per la cronologia"),
                B,
            ],
            mobile: &[
                B,
                t("Comandi Disponibili:"),
                B,
                t("Comandi Portfolio:"),
                t("  • about      - Scopri di più su di me"),
                t("  • skills     - Visualizza le mie competenze"),
                t("  • projects   - Vedi i miei progetti recenti"),
                t("  • experience - Controlla la mia esperienza"),
                t("  • education  - Visualizza la mia formazione"),
                t("  • contact    - Ottieni le mie informazioni"),
                t("  • blog       - i miei ultimi articoli"),
                B,
                t("Comandi Terminale:"),
                t("  • ls         - Elenca file e directory"),
                t("  • cd         - Cambia directory"),
                t("  • cat        - Mostra contenuto file"),
                t("  • pwd        - Mostra directory corrente"),
                t("  • whoami     - Mostra informazioni utente"),
                t("  • date       - Mostra data/ora corrente"),
                t("  • tree       - Mostra albero directory"),
                t("  • clear      - Pulisci schermo terminale"),
                t("  • lang       - Cambia lingua (en|it)"),
                t("  • help       - Mostra questo messaggio"),
                B,
                t("Suggerimento: Usa Tab per il completamento automatico e ↑/↓ per la cronologia"),
                B,
            ],
        },
        about: &[
            B,
            t("Su di Me"),
            t("═══════════"),
            B,
            Line::image(ImageId::Profile),
            t("Sviluppatore Full Stack con oltre 4 anni di apprendimento continuo e sviluppo di progetti."),
            t("nella creazione di applicazioni web scalabili e nella risoluzione di problemi complessi."),
            B,
            t("Specializzazioni:"),
            t("  • Frontend: React, TypeScript, CSS, HTML5"),
            t("  • Backend: Node.js, Python, mySQL"),
            t("  • DevOps: CI/CD, Infrastructure as Code"),
            B,
            t("Cosa mi motiva:"),
            t("  • Creare esperienze utente eccezionali"),
            t("  • Scrivere codice pulito e manutenibile"),
            t("  • Apprendimento continuo e innovazione"),
            B,
            t("Attualmente a Milano, MI"),
            t("Aperto a opportunità remote in tutto il mondo"),
            B,
        ],
        skills: &[
            B,
            t("Technical Skills"),
            t("═══════════════════"),
            B,
            t("Frontend Development:"),
            t("  ▓▓▓░░ React.js             (Intermedio)"),
            t("  ▓▓▓▓░ TypeScript/JavaScript (Avanzato)"),
            t("  ▓▓▓▓▓ HTML5/CSS3/SCSS      (Esperto)"),
            t("  ▓▓▓▓░ Tailwind CSS         (Avanzato)"),
            t("  ▓▓▓░░ Webpack/Vite         (Intermedio)"),
            B,
            t("Backend Development:"),
            t("  ▓▓▓░░ Node.js              (Intermedio)"),
            t("  ▓▓░░░ Python               (Basi)"),
            t("  ▓▓░░░ PHP                  (Basi)"),
            t("  ▓▓▓▓░ RESTful APIs         (Avanzato)"),
            B,
            t("Databases:"),
            t("  ▓▓▓▓░ MySQL                (Avanzato)"),
            t("  ▓░░░░ MongoDB              (familiarità)"),
            B,
            t("Cloud & DevOps:"),
            t("  ▓▓░░░ CI/CD Pipelines      (Basi)"),
            t("  ▓▓▓░░ GitHub Actions       (Intermedio)"),
            B,
            t("Tools & Others:"),
            t("  ▓▓▓▓░ Git/GitHub           (Avanzato)"),
            t("  ▓▓▓▓▓ VS Code              (Esperto)"),
            B,
        ],
        projects: &[
            B,
            t("Progetti in Evidenza"),
            t("════════════════════════"),
            B,
            t("1.  Movie app"),
            t("   ├─ Stack Tecnologico: TypeScript, TMDB (API), Vercel (per il deploy)"),
            t("   ├─ Funzionalità: mini-simulazione di Netflix, visualizzazione lista serie popolari e lista film popolari"),
            Line::link("   ├─ ", "https://github.com/Niccolo-Maffioli/movie-niccolo-app", "Github"),
            Line::link("   └─ ", "https://movie-niccolo-app-1yzy.vercel.app/", "Movie app"),
            B,
            t("2. Portfolio Exlibris"),
            t("   ├─ Stack Tecnologico: HTML, CSS, JavaScript, Netlify (per il deploy)"),
            t("   ├─ Funzionalità: template portfolio per i collaboratori di Exlibris"),
            Line::link("   ├─ ", "https://github.com/Niccolo-Maffioli/Exlibrisportfolio", "GitHub"),
            Line::link("   └─ ", "https://exlibris.link", "ExLibris portfolio template"),
            B,
            t("3. Blink"),
            t("   ├─ Stack Tecnologico: HTML, CSS, JavaScript, Netlify (per il deploy)"),
            t("   ├─ Funzionalità: sito di film per MetaProject Mohole"),
            Line::link("   ├─ ", "https://blinkprimevideo.netlify.app/", "Blink movie app"),
            Line::link("   └─ ", "https://github.com/Niccolo-Maffioli/PrimeGift-More", "GitHub"),
            B,
        ],
        experience: &[
            B,
            t("Esperienza Professionale"),
            t("════════════════════════════"),
            B,
            t("2022 – 2023"),
            t("Collaborazione Freelance"),
            t("   Exlibris.link Srl"),
            t("   ┌─ Progettazione di copertine per libri digitali (formato EPUB3)"),
            t("   ├─ Sviluppo e gestione di un sistema intranet web per l'archiviazione di contenuti digitali"),
            t("   └─ Realizzazione di un'applicazione web per la gestione dei portfolio digitali dei collaboratori"),
            B,
            t("2021 – 2022"),
            t("Collaborazione con il reparto R&S"),
            t("   Ste Industries Srl"),
            t("   ┌─ Creazione di loghi prototipo per nuove linee di prodotto"),
            t("   └─ Progettazione di mockup e materiali visivi per brochure marketing"),
            B,
        ],
        education: &[
            B,
            t("Formazione & Certificazioni"),
            t("══════════════════════════════"),
            B,
            t("Sviluppatore Full Stack con Tecnologie Cloud"),
            t("   ITS - Tech Talent Factory, Milano"),
            t("   2024 - 2026 | Voto finale: --"),
            B,
            t("Graphic Design"),
            t("   Mohole, Milano"),
            t("   2022 - 2024 | Voto finale: 27/30"),
            B,
            t("Web e Media Digitali"),
            t("   Mohole, Milano"),
            t("   2020 - 2022 | Voto finale: 25/30"),
            B,
            t("Liceo Artistico Brera (Hajeck) – Indirizzo Architettura"),
            t("   Milano, Italia"),
            t("   2014 - 2019"),
            B,
            t("Formazione Continua:"),
            t("   • Best practices in JavaScript e TypeScript"),
            t("   • Design Responsive e Accessibilità"),
            t("   • Fondamenti di DevOps e principi CI/CD"),
            t("   • Git e flussi di lavoro per il controllo versione"),
            B,
            t("Risultati:"),
            t("   • Sviluppato e distribuito diversi progetti personali"),
            t("   • Collaborato su progetti accademici in ambito design e sviluppo"),
            B,
        ],
        contact: &[
            B,
            t("Informazioni di Contatto"),
            t("════════════════════"),
            B,
            t("Email:  nico.maffioli@gmail.com"),
            t("Cell:   +39 3348691322"),
            Line::link("", "https://niccolo.dev/", "Portfolio Personale"),
            t("Sede:   Milano, MI"),
            B,
            t("Link Professionali:"),
            Line::link("   ", "https://www.linkedin.com/in/niccolomaffioli/", "Profilo Linkedin"),
            Line::link("   ", "https://github.com/Niccolo-Maffioli/", "GitHub"),
            B,
            t("Restiamo in contatto!"),
            t("   Sono sempre aperto a discutere nuove opportunità,"),
            t("   collaborare su progetti interessanti o semplicemente"),
            t("   fare due chiacchiere su tecnologia e sviluppo."),
            B,
            t("Disponibilità: Aperto a nuove opportunità"),
            t("Tariffa: €80-120/ora (freelance)"),
            t("Fuso orario: CET/CEST (UTC+1/UTC+2)"),
            B,
        ],
        whoami: "Sviluppatore Full Stack",
        tree: &[
            B,
            t("Struttura Directory Portfolio"),
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
                t("Attenzione: questo blog contiene riflessioni personali e mediche."),
                t("Sono parte della mia storia, vanno oltre il lavoro."),
                t("Leggere con rispetto e mente aperta."),
                B,
                t("Articoli:"),
                t("  • [2025-06-09] - L'intervento imminente"),
                t("  • [2025-04-15] - Lo stage e i miei obiettivi"),
                B,
                t("Usa il comando `blog <data>` per leggere un post."),
                t("   Esempio: `blog 2025-06-09`"),
            ],
            entries: &[
                (
                    "2025-06-09",
                    &[
                        t("[2025-06-09] - Il prossimo intervento al cervello"),
                        B,
                        t("Dopo oltre 12 anni vissuti con l’epilessia, sto affrontando un momento cruciale:"),
                        t("un intervento ad alto rischio sull’insula destra. Non è la mia prima operazione,"),
                        t("ma potrebbe essere quella con le conseguenze più importanti — nel bene o nel male."),
                        B,
                        t("I medici non sono sicuri. Potrebbe essere la scelta giusta, oppure un errore."),
                        t("Ma sono arrivato fin qui con forza e pazienza."),
                        B,
                        t("Qualunque cosa accada, sono orgoglioso della persona che sono diventato."),
                    ],
                ),
                (
                    "2025-04-15",
                    &[
                        t("[2025-04-15] - Lo stage e i miei obiettivi"),
                        B,
                        t("Attualmente sto facendo uno stage organizzato dalla scuola."),
                        t("È il mio ultimo anno, e questo tirocinio rappresenta un passo fondamentale per il mio futuro."),
                        B,
                        t("Sto imparando molto, lavorando su progetti reali, e cercando di bilanciare"),
                        t("vita, salute e istruzione — e onestamente, me la sto cavando bene."),
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
            cat_missing_operand: "cat: operando file mancante",
            cat_not_found,
        },
    },
};
