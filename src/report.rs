//! 산출 결과를 선택된 언어로 출력한다. 계산은 하지 않는다.

use std::io::{self, Write};

use crate::estimate::MaterialBill;
use crate::i18n::{keys, Translator};
use crate::quantity::Material;

/// 결과 한 줄: `<Label>: <value to 2 decimals> <unit>`
pub fn format_line(tr: &Translator, material: Material, bill: &MaterialBill) -> String {
    format!(
        "{}: {:.2} {}",
        tr.t(material.label_key()),
        material.amount(bill),
        tr.t(material.unit().label_key())
    )
}

/// 빈 줄, 제목, 자재 9줄로 이루어진 결과 블록을 만든다.
pub fn render(tr: &Translator, bill: &MaterialBill) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(tr.t(keys::REPORT_HEADING));
    out.push('\n');
    for material in Material::ALL {
        out.push_str(&format_line(tr, material, bill));
        out.push('\n');
    }
    out
}

pub fn print<W: Write>(out: &mut W, tr: &Translator, bill: &MaterialBill) -> io::Result<()> {
    out.write_all(render(tr, bill).as_bytes())?;
    out.flush()
}
