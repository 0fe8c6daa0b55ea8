//! Integration test: the reference instrument reproduces its pinned chain.
//!
//! rout=0.58, rin=0.43, g=0.97, a=3, b=3, h=0.51, c=0.51, n=5 (mm),
//! actuated with delL=0.3 mm and no base rotation.

use approx::assert_relative_eq;
use nalgebra::Vector3;
use notchkin_core::config::SegmentConfig;
use notchkin_core::types::SafetyLimits;
use notchkin_kinematics::{configure, pose, update, LinkKind, SegmentModel};
use notchkin_test_utils::{reference_actuation, reference_geometry, REFERENCE};

fn reference_model() -> SegmentModel {
    configure(reference_geometry(), SafetyLimits::default()).unwrap()
}

#[test]
fn neutral_axis_matches_reference() {
    let model = reference_model();
    assert_relative_eq!(
        model.geometry().neutral_axis_offset(),
        REFERENCE.neutral_axis,
        epsilon = 1e-5
    );
}

#[test]
fn notch_state_matches_reference() {
    let chain = update(&reference_model(), reference_actuation()).unwrap();
    assert_relative_eq!(chain.state().curvature, REFERENCE.curvature, epsilon = 1e-5);
    assert_relative_eq!(chain.state().arc_length, REFERENCE.arc_length, epsilon = 1e-5);
}

#[test]
fn first_two_frames_match_reference() {
    let chain = update(&reference_model(), reference_actuation()).unwrap();
    for i in 0..2 {
        let expected = Vector3::from(REFERENCE.translations[i]);
        assert_relative_eq!(chain.get(i).unwrap().translation(), expected, epsilon = 1e-5);
    }
}

#[test]
fn whole_chain_matches_reference() {
    let chain = update(&reference_model(), reference_actuation()).unwrap();
    assert_eq!(chain.len(), REFERENCE.translations.len());
    for (t, expected) in chain.transforms().zip(REFERENCE.translations.iter()) {
        assert_relative_eq!(t.translation(), Vector3::from(*expected), epsilon = 1e-9);
    }
}

#[test]
fn reference_chain_is_deterministic() {
    let model = reference_model();
    let first = model.update(reference_actuation()).unwrap();
    let second = model.update(reference_actuation()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_config_is_the_reference_instrument() {
    let config = SegmentConfig::default();
    assert_eq!(config.geometry, reference_geometry());
    assert_eq!(config.actuation, reference_actuation());
    let model = SegmentModel::from_config(&config).unwrap();
    let chain = model.update(config.actuation).unwrap();
    let tip = chain.tip().unwrap().translation();
    assert_relative_eq!(tip, Vector3::from(REFERENCE.translations[11]), epsilon = 1e-9);
}

#[test]
fn reference_chain_bends_toward_negative_y() {
    let chain = update(&reference_model(), reference_actuation()).unwrap();
    let ys: Vec<f64> = chain.transforms().map(|t| t.translation().y).collect();
    for pair in ys.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    // five notches of k*s each
    let total = chain.state().total_bend_angle(5);
    assert_relative_eq!(total, 5.0 * 0.332_241_511_003_799_4, epsilon = 1e-9);
}

#[test]
fn exported_link_kinds() {
    let chain = update(&reference_model(), reference_actuation()).unwrap();
    let poses = pose::export(&chain);
    assert_eq!(poses[0].kind, LinkKind::Base);
    assert_eq!(poses[1].kind, LinkKind::Bend);
    assert_eq!(poses[2].kind, LinkKind::Spacer);
    assert_eq!(poses[11].kind, LinkKind::End);
    assert_eq!(
        poses.iter().filter(|p| p.kind == LinkKind::Bend).count(),
        5
    );
}
