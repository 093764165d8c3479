use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::estimate::{self, MaterialBill};
use crate::i18n::{Language, Translator};
use crate::report;
use crate::ui_cli::{self, Console};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(crate::config::ConfigError),
    /// 엄격 모드에서 값을 받기 전에 입력이 끝남
    InputClosed,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "console I/O error: {e}"),
            AppError::Config(e) => write!(f, "configuration error: {e}"),
            AppError::InputClosed => write!(f, "input ended before all measurements were entered"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// 실행 시 결정되는 옵션. 설정 파일 값에 CLI 플래그를 덮어쓴 결과이다.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub strict: bool,
    pub locales_dir: Option<PathBuf>,
}

impl RunOptions {
    /// 설정 파일 값에서 시작해 CLI 값이 있으면 덮어쓴다.
    pub fn resolve(cfg: &Config, strict_flag: bool, locales_flag: Option<PathBuf>) -> Self {
        Self {
            strict: strict_flag || cfg.input.strict,
            locales_dir: locales_flag.or_else(|| cfg.locales.dir.as_ref().map(PathBuf::from)),
        }
    }
}

/// 한 번의 대화 세션: 입력 수집 → 계산 → 결과 출력.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    opts: &RunOptions,
) -> Result<MaterialBill, AppError> {
    let pack_dir: Option<&Path> = opts.locales_dir.as_deref();
    let mut console = Console::new(input, output, opts.strict);

    let menu_tr = Translator::new_with_pack(Language::En, pack_dir);
    let lang = ui_cli::choose_language(&mut console, &menu_tr)?;
    let tr = if lang == Language::En {
        menu_tr
    } else {
        Translator::new_with_pack(lang, pack_dir)
    };

    ui_cli::show_welcome(&mut console, &tr)?;
    let house = ui_cli::choose_house_type(&mut console, &tr)?;
    let measurements = ui_cli::collect_measurements(&mut console, &tr)?;

    let bill = estimate::estimate(&measurements, house);
    report::print(console.output(), &tr, &bill)?;
    info!(lang = tr.language_code(), ?house, "estimate printed");
    Ok(bill)
}
