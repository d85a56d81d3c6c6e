//! Property tests for the shared hardware rules and component arithmetic.

use cabinetkit_components::component::Component;
use cabinetkit_components::door::SingleHingedDoor;
use cabinetkit_components::drawer::StandardDrawer;
use cabinetkit_components::hinge_count;
use cabinetkit_components::rules::{auto_slide_length, hinge_positions, SLIDE_REAR_CLEARANCE};
use cabinetkit_components::shelf::AdjustableShelf;
use cabinetkit_core::{ComponentContext, PanelType};
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// Strategies
// =============================================================================

fn arb_door_height() -> impl Strategy<Value = f64> {
    8.0f64..96.0
}

fn arb_section() -> impl Strategy<Value = (f64, f64, f64)> {
    (12.0f64..36.0, 20.0f64..48.0, 12.0f64..25.0)
}

// =============================================================================
// Hinges
// =============================================================================

proptest! {
    #[test]
    fn hinge_count_is_monotonic(a in arb_door_height(), b in arb_door_height()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(hinge_count(low) <= hinge_count(high));
        prop_assert!((2..=4).contains(&hinge_count(low)));
    }

    #[test]
    fn hinge_positions_lie_on_the_door(height in arb_door_height()) {
        let positions = hinge_positions(height);
        prop_assert_eq!(positions.len() as u32, hinge_count(height));
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(positions.iter().all(|&p| p > 0.0 && p < height));
    }

    #[test]
    fn door_hardware_follows_hinge_rule((w, h, d) in arb_section()) {
        let ctx = ComponentContext::new(w, h, d).unwrap();
        let config = json!({"overlay": "inset", "reveal": 0.0, "handle": "none"});
        let hardware = SingleHingedDoor.hardware(&config, &ctx).unwrap();
        prop_assert_eq!(hardware.len(), 1);
        prop_assert_eq!(hardware[0].quantity, hinge_count(h));
    }
}

// =============================================================================
// Slides and drawers
// =============================================================================

proptest! {
    #[test]
    fn auto_slide_leaves_rear_clearance(depth in 5.0f64..40.0) {
        match auto_slide_length(depth) {
            Some(length) => prop_assert!(length + SLIDE_REAR_CLEARANCE <= depth),
            None => prop_assert!(depth < 10.0 + SLIDE_REAR_CLEARANCE),
        }
    }

    #[test]
    fn drawer_fronts_cover_the_opening(count in 1u32..5, (w, h, d) in arb_section()) {
        let ctx = ComponentContext::new(w, h, d).unwrap();
        let config = json!({"count": count});
        prop_assume!(StandardDrawer.validate(&config, &ctx).is_valid());

        let result = StandardDrawer.generate(&config, &ctx).unwrap();
        let fronts: f64 = result
            .panels_of_type(PanelType::DrawerFront)
            .map(|p| p.height)
            .sum();
        let covered = fronts + f64::from(count) * 0.125;
        prop_assert!((covered - (h + 2.0 * ctx.thickness())).abs() < 1e-9);
        prop_assert_eq!(result.count_of_type(PanelType::DrawerFront), count as usize);
    }
}

// =============================================================================
// Shelves
// =============================================================================

proptest! {
    #[test]
    fn adjustable_shelves_stay_in_section(count in 1u32..6, (w, h, d) in arb_section()) {
        let ctx = ComponentContext::new(w, h, d).unwrap();
        let config = json!({"count": count});
        prop_assume!(AdjustableShelf.validate(&config, &ctx).is_valid());

        let result = AdjustableShelf.generate(&config, &ctx).unwrap();
        for shelf in result.panels_of_type(PanelType::Shelf) {
            prop_assert!(shelf.position.y >= 0.0 && shelf.position.y <= h);
            prop_assert!(shelf.width < w);
        }
        prop_assert_eq!(result.hardware_quantity("Shelf pin"), 4 * count);
    }
}
