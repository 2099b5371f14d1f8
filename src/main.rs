//! decaf - CoffeeScript/JavaScript BATCH CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use decaf::{
    cli::Args,
    classify::LocalFs,
    config::RunConfiguration,
    engine::CommandEngine,
    error::{DecafError, FatalError},
    pattern::EligibilityFilter,
    processor::{Processor, ProgressSink},
    report::write_error_log,
    stream::run_with_stream,
};

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = args.run_config();
    let engine = args.command_engine();
    debug!(
        engine = %args.engine,
        options = %serde_json::to_string(&config.engine).unwrap_or_default(),
        "실행 설정"
    );

    // 경로가 없으면 표준 입출력 모드
    if args.is_stream_mode() {
        return run_with_stream(io::stdin().lock(), io::stdout().lock(), &config, &engine)
            .map_err(report_fatal);
    }

    let filter = args.eligibility_filter().context("폴더 항목 패턴 해석 실패")?;

    print_header(&args, &config);

    run_path_mode(&args, &config, &engine, filter)
}

/// 진단 로그 설정 (표준 에러로 출력)
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("decaf=debug,warn")
        } else {
            EnvFilter::new("decaf=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// 헤더 출력
fn print_header(args: &Args, config: &RunConfiguration) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " ☕ CoffeeScript/JavaScript BATCH CONVERTER"
            .bright_white()
            .bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 경로: {}",
        "📂".bright_cyan(),
        args.paths.len().to_string().bright_green()
    );
    println!("  {} 모드: {}", "⚙️".bright_yellow(), config.input_kind);
    println!("  {} 변환 엔진: {}", "🔧".bright_magenta(), args.engine);

    let flags = config.engine.to_flags();
    if !flags.is_empty() {
        println!("  {} 엔진 옵션: {}", "🎯".bright_cyan(), flags.join(" "));
    }

    if !args.pattern.is_empty() {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), args.pattern.join(", "));
    }

    if let Some(ref log) = args.log {
        println!("  {} 에러 로그: {:?}", "📝".bright_white(), log);
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!();
}

/// 파일/폴더 경로 모드 실행
fn run_path_mode(
    args: &Args,
    config: &RunConfiguration,
    engine: &CommandEngine,
    filter: EligibilityFilter,
) -> Result<()> {
    let progress = ConsoleProgress::new();

    let outcome = Processor::new(config, &LocalFs, engine)
        .with_filter(filter)
        .with_progress(&progress)
        .run(args.paths.iter().cloned());

    progress.finish();

    let result = outcome.map_err(report_fatal)?;

    // 에러 출력
    print_errors(&result.errors, args.verbose);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &result.errors).context("에러 로그 작성 실패")?;
        println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);
    }

    // 통계 출력
    result.stats.print_summary();

    if result.is_success() {
        println!("\n{} 모든 파일을 변환했습니다!\n", "✅".bright_green());
    } else {
        println!(
            "\n{} {} 개의 오류가 있었습니다.\n",
            "⚠️".bright_yellow(),
            result.errors.len().to_string().red()
        );
    }

    Ok(())
}

/// 치명적 에러 처리
///
/// 변환 진단은 바로 출력하고 종료 코드 1로 끝냅니다. 그 밖의 에러는
/// 호출한 쪽으로 그대로 돌려줍니다.
fn report_fatal(error: FatalError) -> anyhow::Error {
    match error {
        FatalError::Diagnostic { path, error } => {
            let error = if error.filename.is_none() {
                error.with_filename(path.as_deref())
            } else {
                error
            };

            eprintln!("{} {}", "❌".bright_red(), "변환 실패".red().bold());
            eprintln!("{}", error.pretty_print());
            std::process::exit(1);
        }
        other => anyhow::Error::new(other),
    }
}

/// 콘솔 진행 상황 표시
struct ConsoleProgress {
    spinner: ProgressBar,
}

impl ConsoleProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_item(&self, path: &Path) {
        self.spinner.set_message(path.display().to_string());
    }

    fn on_file(&self, source: &Path, destination: &Path) {
        // 진행 줄은 스피너가 숨겨져 있어도 출력합니다.
        self.spinner.suspend(|| {
            println!(
                "{} → {}",
                source.display(),
                destination.display().to_string().bright_green()
            );
        });
    }
}

/// 에러 목록 출력
fn print_errors(errors: &[DecafError], verbose: bool) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 경로:".bright_red());
    for error in errors {
        let path = error.path().map(Path::to_path_buf).unwrap_or_else(PathBuf::new);
        println!("  {} [{}] {}", "•".red(), error.kind(), path.display());
        if verbose {
            println!("    {}", error.to_string().dimmed());
        }
    }
}
