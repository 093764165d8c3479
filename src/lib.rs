//! 핵심 계산 로직을 라이브러리로 분리하여 대화형 CLI와 테스트가 같은 코드를 쓰도록 한다.

pub mod app;
pub mod config;
pub mod estimate;
pub mod formulas;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod ui_cli;
