use crate::estimate::MaterialBill;
use crate::i18n::keys;

/// 산출 대상 자재 종류. 선언 순서가 곧 보고서 출력 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Cement,
    Sand,
    Gravel,
    Rebar,
    Chb,
    Plywood,
    SteelBars,
    Tiles,
    Wood,
}

/// 자재 수량에 붙는 단위. 언어별 표기는 i18n 테이블에서 찾는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialUnit {
    Bags,
    /// 풀어 쓴 입방미터 (cubic meters)
    CubicMeters,
    /// 기호 표기 입방미터 (m³)
    CubicMeterSymbol,
    Kilograms,
    Pieces,
    Sheets,
}

impl Material {
    pub const ALL: [Material; 9] = [
        Material::Cement,
        Material::Sand,
        Material::Gravel,
        Material::Rebar,
        Material::Chb,
        Material::Plywood,
        Material::SteelBars,
        Material::Tiles,
        Material::Wood,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Material::Cement => keys::MATERIAL_CEMENT,
            Material::Sand => keys::MATERIAL_SAND,
            Material::Gravel => keys::MATERIAL_GRAVEL,
            Material::Rebar => keys::MATERIAL_REBAR,
            Material::Chb => keys::MATERIAL_CHB,
            Material::Plywood => keys::MATERIAL_PLYWOOD,
            Material::SteelBars => keys::MATERIAL_STEEL_BARS,
            Material::Tiles => keys::MATERIAL_TILES,
            Material::Wood => keys::MATERIAL_WOOD,
        }
    }

    pub fn unit(&self) -> MaterialUnit {
        match self {
            Material::Cement => MaterialUnit::Bags,
            Material::Sand | Material::Gravel => MaterialUnit::CubicMeters,
            Material::Rebar | Material::SteelBars => MaterialUnit::Kilograms,
            Material::Chb | Material::Tiles => MaterialUnit::Pieces,
            Material::Plywood => MaterialUnit::Sheets,
            Material::Wood => MaterialUnit::CubicMeterSymbol,
        }
    }

    /// 산출 결과에서 해당 자재의 수량을 꺼낸다.
    pub fn amount(&self, bill: &MaterialBill) -> f64 {
        match self {
            Material::Cement => bill.cement,
            Material::Sand => bill.sand,
            Material::Gravel => bill.gravel,
            Material::Rebar => bill.rebar,
            Material::Chb => bill.chb,
            Material::Plywood => bill.plywood,
            Material::SteelBars => bill.steel_bars,
            Material::Tiles => bill.tiles,
            Material::Wood => bill.wood,
        }
    }
}

impl MaterialUnit {
    pub fn label_key(&self) -> &'static str {
        match self {
            MaterialUnit::Bags => keys::UNIT_BAGS,
            MaterialUnit::CubicMeters => keys::UNIT_CUBIC_METERS,
            MaterialUnit::CubicMeterSymbol => keys::UNIT_CUBIC_METER_SYMBOL,
            MaterialUnit::Kilograms => keys::UNIT_KILOGRAMS,
            MaterialUnit::Pieces => keys::UNIT_PIECES,
            MaterialUnit::Sheets => keys::UNIT_SHEETS,
        }
    }
}
