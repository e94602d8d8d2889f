use strcalc::{AddReport, MAX_NUMBER, Stage, StageSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Applies ANSI styles when enabled; passes text through otherwise.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, style: &str) -> String {
            if !self.enabled {
                return s.as_ref().to_string();
            }
            format!("{style}{}{RESET}", s.as_ref())
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(report: &AddReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Adding: {:?}", report.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    for summary in &report.details.stages {
        print_stage(report, summary, &palette);
    }
    for stage in skipped_stages(report) {
        println!("  {} {}", palette.dim(format!("{:<9}", stage.name())), palette.dim("- skipped"));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &report.outcome {
        Ok(sum) => println!("  {}", palette.bold(palette.paint(sum.to_string(), ansi::GREEN))),
        Err(err) => {
            println!("  {} {}", palette.paint(format!("[{}]", err.kind().name()), ansi::RED), err);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", report.elapsed), ansi::GREEN));
    println!();
}

fn print_stage(report: &AddReport, summary: &StageSummary, palette: &ansi::Palette) {
    let failed = report.details.failed_stage == Some(summary.stage);
    let label = palette.paint(format!("{:<9}", summary.stage.name()), ansi::BLUE);
    let mark = if failed { palette.paint("✗", ansi::RED) } else { palette.paint("✓", ansi::GREEN) };

    println!(
        "  {} {} {}  {}",
        label,
        mark,
        stage_detail(report, summary.stage, failed),
        palette.dim(format!("{:?}", summary.duration))
    );

    if summary.stage == Stage::Tokenize && !failed {
        for (idx, token) in report.details.tokens.iter().enumerate().take(8) {
            println!(
                "    {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.paint(format!("{:?}", token), ansi::YELLOW)
            );
        }
        if report.details.tokens.len() > 8 {
            println!("    {}", palette.dim(format!("... +{} more", report.details.tokens.len() - 8)));
        }
    }
}

fn stage_detail(report: &AddReport, stage: Stage, failed: bool) -> String {
    let details = &report.details;
    if failed {
        return match &report.outcome {
            Err(err) => err.to_string(),
            Ok(_) => String::new(),
        };
    }

    match stage {
        Stage::Extract => {
            let source = if details.custom { "custom" } else { "default" };
            format!("{} delimiters {:?}", source, details.delimiters)
        }
        Stage::Tokenize => format!("{} tokens", details.tokens.len()),
        Stage::Parse => format!("{:?}", details.parsed),
        Stage::Filter if details.dropped.is_empty() => format!("nothing above {}", MAX_NUMBER),
        Stage::Filter => format!("ignored {:?} (above {})", details.dropped, MAX_NUMBER),
        Stage::Validate => "no negatives".to_string(),
        Stage::Reduce => "sum fits in i32".to_string(),
    }
}

fn skipped_stages(report: &AddReport) -> impl Iterator<Item = Stage> + '_ {
    Stage::ALL.into_iter().filter(|stage| !report.details.stages.iter().any(|s| s.stage == *stage))
}
