use hmm_phonology::{Breakdown, actor_category, display_final, display_initial};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_breakdowns(breakdowns: &[Breakdown], verbose: bool, color: bool) {
    let palette = ansi::Palette::new(color);

    for b in breakdowns {
        print_breakdown(b, verbose, &palette);
    }

    let off_set = breakdowns.iter().filter(|b| !b.canonical).count();
    if off_set > 0 {
        println!(
            "\n{}",
            palette.paint(format!("⚠  {off_set} syllable(s) fell outside the 13 sets; check the spelling."), ansi::YELLOW)
        );
    }

    if verbose {
        let total: std::time::Duration = breakdowns.iter().map(|b| b.elapsed).sum();
        println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
        println!("  Total: {}", palette.paint(format!("{total:?}"), ansi::GREEN));
    }
    println!();
}

fn print_breakdown(b: &Breakdown, verbose: bool, palette: &ansi::Palette) {
    let parsed = &b.parsed;
    let key = parsed.scene_key();

    println!("\n{}", palette.bold(palette.paint(format!("⚙  {}", parsed.full), ansi::CYAN)));
    println!(
        "  {} {} {} {} {}",
        palette.dim("Initial:"),
        palette.paint(display_initial(&parsed.initial), ansi::GREEN),
        palette.dim("→ Actor:"),
        palette.paint(&key.actor_id, ansi::BLUE),
        palette.dim(format!("({})", actor_category(&parsed.initial))),
    );
    println!(
        "  {} {} {} {}",
        palette.dim("Final:  "),
        palette.paint(display_final(&parsed.final_), ansi::GREEN),
        palette.dim("→ Set:"),
        palette.paint(&key.set_id, ansi::BLUE),
    );
    println!(
        "  {} {} {} {}",
        palette.dim("Tone:   "),
        palette.paint(parsed.tone.to_string(), ansi::GREEN),
        palette.dim("→ Room:"),
        palette.paint(parsed.tone.room(), ansi::BLUE),
    );

    if verbose {
        println!("  {}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
        println!("    {} {}", palette.dim("stripped:"), palette.paint(&b.stripped, ansi::YELLOW));
        println!("    {} {}", palette.dim("initial: "), palette.paint(b.initial_rule, ansi::CYAN));
        if let Some(glide) = b.glide_rule {
            println!("    {} {}", palette.dim("glide:   "), palette.paint(glide, ansi::CYAN));
        }
        println!(
            "    {} {} {}",
            palette.dim("final:   "),
            palette.paint(b.final_rule, ansi::CYAN),
            palette.dim(format!("(residual \"{}\")", b.residual)),
        );
    }
}
