//! Size lookup from height, weight and build.

use crate::models::{Build, Size};

/// All sizes, smallest first
pub const SIZE_ORDER: [Size; 6] = [Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL];

/// Size from height and weight alone.
///
/// The thresholds apply in sequence and each later one overrides the earlier result, so a
/// short but heavy person lands on the larger size.
fn base_size(height_cm: i32, weight_kg: i32) -> Size {
    let mut base = Size::M;
    if height_cm < 165 || weight_kg < 55 {
        base = Size::S;
    }
    if height_cm > 180 || weight_kg > 80 {
        base = Size::L;
    }
    if height_cm > 190 || weight_kg > 95 {
        base = Size::XL;
    }
    base
}

fn position(size: Size) -> i32 {
    SIZE_ORDER
        .iter()
        .position(|s| *s == size)
        .map_or(0, |i| i as i32)
}

/// Recommend a size: the base size shifted by the build adjustment, clamped to
/// [`SIZE_ORDER`]. Defined for every input.
pub fn recommend_size(height_cm: i32, weight_kg: i32, build: Build) -> Size {
    let base = base_size(height_cm, weight_kg);
    let last = SIZE_ORDER.len() as i32 - 1;
    let index = (position(base) + build.adjustment()).clamp(0, last);
    SIZE_ORDER[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_build_table() {
        let cases = [
            ((170, 70), Size::M),
            ((165, 55), Size::M),
            ((164, 70), Size::S),
            ((170, 54), Size::S),
            ((180, 80), Size::M),
            ((181, 70), Size::L),
            ((170, 81), Size::L),
            ((190, 95), Size::L),
            ((191, 70), Size::XL),
            ((170, 96), Size::XL),
            ((200, 100), Size::XL),
        ];

        for ((height, weight), expected) in cases {
            assert_eq!(
                recommend_size(height, weight, Build::Regular),
                expected,
                "height {} weight {}",
                height,
                weight
            );
        }
    }

    #[test]
    fn test_later_thresholds_override_earlier_ones() {
        // short (S) but heavy (L)
        assert_eq!(recommend_size(160, 85, Build::Regular), Size::L);
        // short (S) but very heavy (XL)
        assert_eq!(recommend_size(150, 100, Build::Regular), Size::XL);
    }

    #[test]
    fn test_build_adjustment_and_clamping() {
        assert_eq!(recommend_size(200, 100, Build::Broad), Size::XXL);
        assert_eq!(recommend_size(150, 50, Build::Slim), Size::XS);
        assert_eq!(recommend_size(170, 70, Build::Athletic), Size::M);
        assert_eq!(recommend_size(170, 70, Build::Slim), Size::S);
        assert_eq!(recommend_size(185, 70, Build::Broad), Size::XL);
    }

    #[test]
    fn test_size_order_matches_enum_order() {
        let mut sorted = SIZE_ORDER;
        sorted.sort();
        assert_eq!(sorted, SIZE_ORDER);
        assert_eq!(Size::XXL.to_string(), "XXL");
    }
}
