use tracing::debug;

use crate::formulas::{self, RebarComponent};

/// 바닥/천장 슬래브 두께 [m]. 한 번만 곱하며 두 슬래브를 합쳐 취급한다.
pub const SLAB_THICKNESS_M: f64 = 0.15;

/// 주택 형태. 층수 배율만 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseType {
    /// 단층
    Bungalow,
    /// 2층 단독주택
    SingleDetached,
}

impl HouseType {
    /// 메뉴 번호를 해석한다. 1 외의 모든 값은 2층으로 본다.
    pub fn from_choice(choice: i64) -> Self {
        if choice == 1 {
            HouseType::Bungalow
        } else {
            HouseType::SingleDetached
        }
    }

    pub fn floor_multiplier(&self) -> f64 {
        match self {
            HouseType::Bungalow => 1.0,
            HouseType::SingleDetached => 2.0,
        }
    }
}

/// 사용자가 입력한 치수 묶음.
///
/// `ceiling_height_m`, `column_volume_m3`는 입력 순서를 맞추기 위해 받지만
/// 어떤 공식에도 쓰이지 않는다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    /// 층당 바닥 면적 [m²]
    pub floor_area_m2: f64,
    /// 벽 면적 [m²]
    pub wall_area_m2: f64,
    /// 천장 높이 [m]
    pub ceiling_height_m: f64,
    /// 기초 체적 [m³]
    pub foundation_volume_m3: f64,
    /// 기둥 체적 [m³]
    pub column_volume_m3: f64,
}

/// 자재 산출 결과.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialBill {
    /// 시멘트 [bags]
    pub cement: f64,
    /// 모래 [m³]
    pub sand: f64,
    /// 자갈 [m³]
    pub gravel: f64,
    /// 철근 [kg]
    pub rebar: f64,
    /// CHB [pieces]
    pub chb: f64,
    /// 합판 [sheets]
    pub plywood: f64,
    /// 보강 철근 [kg]
    pub steel_bars: f64,
    /// 타일 [pieces]
    pub tiles: f64,
    /// 골조 목재 [m³]
    pub wood: f64,
}

/// 콘크리트 한 덩어리에서 나오는 시멘트/모래/자갈/철근 기여분.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConcreteMix {
    pub cement: f64,
    pub sand: f64,
    pub gravel: f64,
    pub rebar: f64,
}

impl ConcreteMix {
    /// 체적과 부위로 배합 기여분을 계산한다.
    pub fn for_volume(volume_m3: f64, component: RebarComponent) -> Self {
        Self {
            cement: formulas::cement(volume_m3),
            sand: formulas::sand(volume_m3),
            gravel: formulas::gravel(volume_m3),
            rebar: formulas::rebar(volume_m3, component.as_label()),
        }
    }

    fn plus(self, other: ConcreteMix) -> Self {
        Self {
            cement: self.cement + other.cement,
            sand: self.sand + other.sand,
            gravel: self.gravel + other.gravel,
            rebar: self.rebar + other.rebar,
        }
    }
}

/// 주택 형태를 반영한 총 바닥 면적 [m²]
pub fn total_floor_area(floor_area_m2: f64, house: HouseType) -> f64 {
    floor_area_m2 * house.floor_multiplier()
}

/// 슬래브 콘크리트 체적 [m³]
pub fn slab_volume(total_floor_area_m2: f64) -> f64 {
    total_floor_area_m2 * SLAB_THICKNESS_M
}

/// 기초와 슬래브 기여분을 합산해 전체 자재량을 산출한다.
pub fn estimate(m: &Measurements, house: HouseType) -> MaterialBill {
    let total_area = total_floor_area(m.floor_area_m2, house);
    let foundation = ConcreteMix::for_volume(m.foundation_volume_m3, RebarComponent::Foundation);
    let slab = ConcreteMix::for_volume(slab_volume(total_area), RebarComponent::Slab);
    let concrete = foundation.plus(slab);

    let bill = MaterialBill {
        cement: concrete.cement,
        sand: concrete.sand,
        gravel: concrete.gravel,
        rebar: concrete.rebar,
        chb: formulas::chb(m.wall_area_m2),
        plywood: formulas::plywood(m.wall_area_m2),
        steel_bars: formulas::steel_bars(total_area),
        tiles: formulas::tiles(total_area),
        wood: formulas::wood(total_area),
    };
    debug!(?house, total_area, ?bill, "material bill computed");
    bill
}
