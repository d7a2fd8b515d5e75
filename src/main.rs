use clap::Parser;

use pavement_engineering_toolbox::{app, config, i18n};

/// 이바노프법 포장 등가탄성계수 계산기 (CLI).
#[derive(Parser, Debug)]
#[command(name = "pavement-cli", version, about = "Pavement Engineering Toolbox (CLI)")]
struct Cli {
    /// 언어 코드 (auto, ko, ko-kr, en, en-us, bg, bg-bg)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 시작 시 읽을 이솔라인 CSV 경로 (생략하면 설정/내장 데이터 사용)
    #[arg(long)]
    data: Option<std::path::PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(path) = cli.data {
        cfg.dataset_path = Some(path.to_string_lossy().into_owned());
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
