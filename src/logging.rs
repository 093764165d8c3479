//! tracing 기반 로그 초기화. 표준출력은 대화 내용 전용이므로 로그는 stderr로 보낸다.

use std::io;

use tracing_subscriber::EnvFilter;

/// 로그 구독자를 설치한다.
///
/// 필터 우선순위: `override_filter`(CLI) > `RUST_LOG` > `default_filter`(설정 파일).
/// 이미 전역 구독자가 있으면 아무것도 하지 않는다.
pub fn init_logging(override_filter: Option<&str>, default_filter: &str) {
    let filter = match override_filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
