//! 콘크리트/조적/마감 자재 환산 공식 모음. 모든 함수는 입력값에 선형이며 부작용이 없다.

/// 콘크리트 1 m³당 시멘트 포대 수
pub const CEMENT_BAGS_PER_M3: f64 = 8.0;
/// 콘크리트 1 m³당 모래 [m³]
pub const SAND_M3_PER_M3: f64 = 0.5;
/// 콘크리트 1 m³당 자갈 [m³]
pub const GRAVEL_M3_PER_M3: f64 = 0.75;
/// 슬래브 콘크리트 1 m³당 철근 [kg]
pub const SLAB_REBAR_KG_PER_M3: f64 = 100.0;
/// 기초 콘크리트 1 m³당 철근 [kg]
pub const FOUNDATION_REBAR_KG_PER_M3: f64 = 120.0;
/// CHB 한 장의 공칭 치수 [m] (두께, 높이, 길이)
pub const CHB_DIMENSIONS_M: (f64, f64, f64) = (0.04, 0.20, 0.40);
/// CHB 제수에 곱해지는 배율. 기존 비율(÷3.2)을 유지하기 위한 값이다.
pub const CHB_DIVISOR_SCALE: f64 = 1000.0;
/// 합판 한 장 치수 [m]
pub const PLYWOOD_SHEET_M: (f64, f64) = (1.22, 2.44);
/// 바닥 10 m²당 철근 [kg]
pub const STEEL_BARS_KG_PER_10_M2: f64 = 100.0;
/// 12" x 12" 타일 한 장 면적 [m²]
pub const TILE_AREA_M2: f64 = 0.0929;
/// 바닥 1 m²당 골조용 목재 [m³]
pub const WOOD_M3_PER_M2: f64 = 0.2;

/// 철근량을 산정할 구조 부위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebarComponent {
    Slab,
    Foundation,
}

impl RebarComponent {
    /// 부위 라벨을 해석한다. 알 수 없는 라벨은 None.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "slab" => Some(RebarComponent::Slab),
            "foundation" => Some(RebarComponent::Foundation),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            RebarComponent::Slab => "slab",
            RebarComponent::Foundation => "foundation",
        }
    }

    fn kg_per_m3(&self) -> f64 {
        match self {
            RebarComponent::Slab => SLAB_REBAR_KG_PER_M3,
            RebarComponent::Foundation => FOUNDATION_REBAR_KG_PER_M3,
        }
    }
}

/// 시멘트 포대 수 [bags]
pub fn cement(volume_m3: f64) -> f64 {
    CEMENT_BAGS_PER_M3 * volume_m3
}

/// 모래 [m³]
pub fn sand(volume_m3: f64) -> f64 {
    SAND_M3_PER_M3 * volume_m3
}

/// 자갈 [m³]
pub fn gravel(volume_m3: f64) -> f64 {
    GRAVEL_M3_PER_M3 * volume_m3
}

/// 부위 라벨에 따른 철근 [kg]. 알 수 없는 라벨이면 0을 반환한다.
pub fn rebar(volume_m3: f64, component: &str) -> f64 {
    RebarComponent::from_label(component)
        .map(|c| rebar_for(volume_m3, c))
        .unwrap_or(0.0)
}

/// 타입이 정해진 부위에 대한 철근 [kg]
pub fn rebar_for(volume_m3: f64, component: RebarComponent) -> f64 {
    component.kg_per_m3() * volume_m3
}

/// 벽 면적으로 CHB 장수를 추정한다.
pub fn chb(wall_area_m2: f64) -> f64 {
    let (t, h, l) = CHB_DIMENSIONS_M;
    let block_volume = t * h * l;
    wall_area_m2 / (block_volume * CHB_DIVISOR_SCALE)
}

/// 거푸집용 합판 장수
pub fn plywood(wall_area_m2: f64) -> f64 {
    let (w, h) = PLYWOOD_SHEET_M;
    wall_area_m2 / (w * h)
}

/// 바닥 면적 기반 보강 철근 [kg]
pub fn steel_bars(total_floor_area_m2: f64) -> f64 {
    STEEL_BARS_KG_PER_10_M2 * (total_floor_area_m2 / 10.0)
}

/// 바닥 타일 장수
pub fn tiles(total_floor_area_m2: f64) -> f64 {
    total_floor_area_m2 / TILE_AREA_M2
}

pub fn wood(total_floor_area_m2: f64) -> f64 {
    total_floor_area_m2 * WOOD_M3_PER_M2
}
