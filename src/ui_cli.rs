use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::app::AppError;
use crate::estimate::{HouseType, Measurements};
use crate::i18n::{keys, Language, Translator};

/// 입출력 스트림을 묶은 대화형 콘솔. 테스트에서는 메모리 버퍼를 넣는다.
///
/// 입력은 줄 단위가 아니라 공백으로 구분된 토큰 단위로 소비한다.
/// 한 줄에 여러 값을 넣으면 남은 토큰은 다음 질문의 답이 된다.
pub struct Console<R, W> {
    input: R,
    output: W,
    strict: bool,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `strict`가 false면 잘못된 숫자는 0으로 읽고 그대로 진행한다.
    pub fn new(input: R, output: W, strict: bool) -> Self {
        Self {
            input,
            output,
            strict,
            pending: VecDeque::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// 한 줄을 출력한다.
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 다음 토큰을 꺼낸다. 입력이 끝났으면 None.
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        while self.pending.is_empty() {
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.pending.extend(buf.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// 메뉴 번호를 읽는다. 앞쪽 정수 부분만 쓰며, 없거나 입력이 끝났으면 0.
    pub fn read_choice(&mut self, prompt: &str) -> Result<i64, AppError> {
        let token = self.next_token(prompt)?;
        Ok(token.as_deref().and_then(leading_integer).unwrap_or(0))
    }

    /// 치수 하나를 읽는다.
    ///
    /// 관대 모드에서는 토큰 앞쪽의 숫자 부분을 쓰고, 없으면 0. 음수도 그대로 받는다.
    /// 엄격 모드에서는 토큰 전체가 유한한 0 이상 값이 될 때까지 다시 묻는다.
    pub fn read_measure(&mut self, tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
        loop {
            let token = self.next_token(tr.t(prompt_key))?;
            if !self.strict {
                return Ok(token.as_deref().and_then(leading_number).unwrap_or(0.0));
            }
            let Some(token) = token else {
                return Err(AppError::InputClosed);
            };
            match token.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => return Ok(v),
                _ => {
                    debug!(input = %token, "rejected measurement");
                    self.say(tr.t(keys::ERROR_EXPECTED_NON_NEGATIVE))?;
                }
            }
        }
    }
}

/// `2x` → 2, `1.5` → 1, `-3` → -3. 숫자로 시작하지 않으면 None.
fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

/// 토큰 앞쪽에서 실수로 해석되는 가장 긴 부분을 읽는다. `50m` → 50.
fn leading_number(token: &str) -> Option<f64> {
    let candidate_len = token
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(*b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    (1..=candidate_len)
        .rev()
        .find_map(|len| token[..len].parse::<f64>().ok())
}

/// 언어 메뉴를 보여주고 선택된 언어를 반환한다. 메뉴 자체는 영어로 표시한다.
pub fn choose_language<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu_tr: &Translator,
) -> Result<Language, AppError> {
    console.say(menu_tr.t(keys::LANGUAGE_MENU_TITLE))?;
    console.say(menu_tr.t(keys::LANGUAGE_MENU_ENGLISH))?;
    console.say(menu_tr.t(keys::LANGUAGE_MENU_FILIPINO))?;
    let choice = console.read_choice(menu_tr.t(keys::PROMPT_CHOICE))?;
    let lang = Language::from_choice(choice);
    debug!(choice, lang = lang.as_code(), "language selected");
    Ok(lang)
}

pub fn show_welcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<(), AppError> {
    console.say(tr.t(keys::WELCOME))
}

/// 주택 형태 메뉴를 처리한다.
pub fn choose_house_type<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<HouseType, AppError> {
    console.say("")?;
    console.say(tr.t(keys::HOUSE_MENU_TITLE))?;
    console.say(tr.t(keys::HOUSE_MENU_BUNGALOW))?;
    console.say(tr.t(keys::HOUSE_MENU_SINGLE_DETACHED))?;
    let choice = console.read_choice(tr.t(keys::PROMPT_CHOICE))?;
    let house = HouseType::from_choice(choice);
    debug!(choice, ?house, "house type selected");
    Ok(house)
}

/// 다섯 가지 치수를 고정된 순서로 입력받는다.
pub fn collect_measurements<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<Measurements, AppError> {
    let floor_area_m2 = console.read_measure(tr, keys::PROMPT_FLOOR_AREA)?;
    let wall_area_m2 = console.read_measure(tr, keys::PROMPT_WALL_AREA)?;
    let ceiling_height_m = console.read_measure(tr, keys::PROMPT_CEILING_HEIGHT)?;
    let foundation_volume_m3 = console.read_measure(tr, keys::PROMPT_FOUNDATION_VOLUME)?;
    let column_volume_m3 = console.read_measure(tr, keys::PROMPT_COLUMN_VOLUME)?;
    let m = Measurements {
        floor_area_m2,
        wall_area_m2,
        ceiling_height_m,
        foundation_volume_m3,
        column_volume_m3,
    };
    debug!(?m, "measurements collected");
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_stops_at_first_non_digit() {
        assert_eq!(leading_integer("2"), Some(2));
        assert_eq!(leading_integer("2x"), Some(2));
        assert_eq!(leading_integer("1.5"), Some(1));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
    }

    #[test]
    fn leading_number_takes_longest_numeric_prefix() {
        assert_eq!(leading_number("50"), Some(50.0));
        assert_eq!(leading_number("50m"), Some(50.0));
        assert_eq!(leading_number("-1.25"), Some(-1.25));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("fifty"), None);
        assert_eq!(leading_number("inf"), None);
    }
}
