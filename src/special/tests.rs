use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn approx_eq_f32(a: f32, b: f32, tol: f32) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq_f32 failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// =====================================================================
// lgamma
// =====================================================================

#[test]
fn lgamma_positive_integers() {
    approx_eq(lgamma(1.0_f64), 0.0, 1e-14);
    approx_eq(lgamma(2.0), 0.0, 1e-14);
    approx_eq(lgamma(3.0), 2.0_f64.ln(), 1e-14);
    approx_eq(lgamma(4.0), 6.0_f64.ln(), 1e-13);
    approx_eq(lgamma(11.0), 3628800.0_f64.ln(), 1e-12);
}

#[test]
fn lgamma_half() {
    // ln Γ(0.5) = 0.5·ln(π)
    approx_eq(lgamma(0.5_f64), 0.5 * core::f64::consts::PI.ln(), 1e-14);
}

#[test]
fn ln_sqrt_2pi_constant() {
    // through the Float trait so this also builds without `std`
    let expected = <f64 as num_traits::Float>::ln(core::f64::consts::TAU) * 0.5;
    approx_eq(LN_SQRT_2PI, expected, 1e-15);
    approx_eq(lgamma(1.0_f64), 0.0, 1e-14);
    approx_eq(lgamma(2.0_f64), 0.0, 1e-14);
}

#[test]
fn lgamma_small_argument_uses_reflection() {
    // Γ(x) ~ 1/x as x → 0⁺
    let x = 1e-3_f64;
    approx_eq(lgamma(x), -x.ln() - 0.5772156649015329 * x, 1e-5);
}

#[test]
fn lgamma_large_no_overflow() {
    let val = lgamma(100.0_f64);
    assert!(val.is_finite());
    approx_eq(val, 359.1342053695754, 1e-8);
}

#[test]
fn lgamma_recurrence_identity() {
    // ln Γ(x+1) = ln x + ln Γ(x)
    for &x in &[0.3, 1.7, 3.14, 5.5, 250.0] {
        approx_eq(lgamma(x + 1.0), x.ln() + lgamma(x), 1e-10);
    }
}

#[test]
fn lgamma_poles_and_nan() {
    assert!(lgamma(0.0_f64).is_infinite());
    assert!(lgamma(-3.0_f64).is_infinite());
    assert!(lgamma(f64::NAN).is_nan());
}

#[test]
fn lgamma_f32() {
    approx_eq_f32(lgamma(5.0_f32), 24.0_f32.ln(), 1e-5);
}

// =====================================================================
// lbeta
// =====================================================================

#[test]
fn lbeta_known() {
    approx_eq(lbeta(1.0_f64, 1.0), 0.0, 1e-14);
    // B(2,3) = 1/12
    approx_eq(lbeta(2.0_f64, 3.0), (1.0_f64 / 12.0).ln(), 1e-13);
    // B(0.5, 0.5) = π
    approx_eq(lbeta(0.5_f64, 0.5), core::f64::consts::PI.ln(), 1e-13);
}

#[test]
fn lbeta_symmetry() {
    for &(a, b) in &[(2.0, 3.0), (0.5, 1.5), (5.0, 7.0), (1e-3, 40.0)] {
        approx_eq(lbeta(a, b), lbeta(b, a), 1e-12);
    }
}

#[test]
fn lbeta_large() {
    let val = lbeta(1000.0_f64, 1000.0);
    assert!(val.is_finite());
    assert!(val < -1000.0);
}

// =====================================================================
// beta_cf
// =====================================================================

#[test]
fn beta_cf_uniform_closed_form() {
    // I_x(1,1) = x = x(1-x)·cf → cf = 1/(1-x)
    let s = CfSettings::<f64>::default();
    for &x in &[0.05, 0.2, 0.3, 0.45] {
        approx_eq(beta_cf(1.0_f64, 1.0, x, &s).unwrap(), 1.0 / (1.0 - x), 1e-13);
    }
}

#[test]
fn beta_cf_iteration_cap_is_an_error() {
    let s = CfSettings {
        max_iter: 1,
        ..CfSettings::<f64>::default()
    };
    assert_eq!(
        beta_cf(2.0_f64, 3.0, 0.3, &s).unwrap_err(),
        SpecialError::ConvergenceFailure
    );
}

#[test]
fn beta_cf_zero_iterations_never_converges() {
    let s = CfSettings {
        max_iter: 0,
        ..CfSettings::<f64>::default()
    };
    assert!(beta_cf(1.0_f64, 1.0, 0.1, &s).is_err());
}

// =====================================================================
// betainc
// =====================================================================

#[test]
fn betainc_boundaries() {
    for &(a, b) in &[(0.5, 0.5), (2.0, 3.0), (1000.0, 1000.0), (1e-3, 1.0)] {
        assert_eq!(betainc(a, b, 0.0_f64).unwrap(), 0.0);
        assert_eq!(betainc(a, b, 1.0_f64).unwrap(), 1.0);
    }
}

#[test]
fn betainc_uniform() {
    for &x in &[0.01, 0.25, 0.5, 0.75, 0.99] {
        approx_eq(betainc(1.0_f64, 1.0, x).unwrap(), x, 1e-14);
    }
}

#[test]
fn betainc_power_closed_forms() {
    for &x in &[0.1, 0.4, 0.7, 0.95] {
        // I_x(a, 1) = x^a
        approx_eq(betainc(3.0_f64, 1.0, x).unwrap(), x * x * x, 1e-14);
        // I_x(1, b) = 1 - (1-x)^b
        approx_eq(betainc(1.0_f64, 4.0, x).unwrap(), 1.0 - (1.0 - x).powi(4), 1e-14);
        // I_x(2, 2) = 3x² - 2x³
        approx_eq(betainc(2.0_f64, 2.0, x).unwrap(), 3.0 * x * x - 2.0 * x * x * x, 1e-14);
    }
}

#[test]
fn betainc_known_values() {
    // Beta(2,5) at 0.2: 1 - 0.8^5 (1 + 5·0.2) - ... = 0.34464
    approx_eq(betainc(2.0_f64, 5.0, 0.2).unwrap(), 0.34464, 1e-13);
    // Arcsine law: I_x(½,½) = (2/π)·asin(√x)
    let x = 0.25_f64;
    let expected = 2.0 / core::f64::consts::PI * x.sqrt().asin();
    approx_eq(betainc(0.5, 0.5, x).unwrap(), expected, 1e-13);
}

#[test]
fn betainc_reflection() {
    for &(a, b, x) in &[(2.0, 5.0, 0.3), (0.5, 3.0, 0.1), (8.0, 2.0, 0.85), (30.0, 40.0, 0.43)] {
        let lhs = betainc(a, b, x).unwrap();
        let rhs = 1.0 - betainc(b, a, 1.0 - x).unwrap();
        approx_eq(lhs, rhs, 1e-13);
    }
}

#[test]
fn betainc_continuous_across_split() {
    // (a+1)/(a+b+2) = 0.5 for a = b; both branches must agree there
    let a = 7.0_f64;
    let split = (a + 1.0) / (2.0 * a + 2.0);
    let below = betainc(a, a, split - 1e-12).unwrap();
    let at = betainc(a, a, split).unwrap();
    let above = betainc(a, a, split + 1e-12).unwrap();
    assert!(below <= at && at <= above, "{below} {at} {above}");
    approx_eq(at, 0.5, 1e-13);
}

#[test]
fn betainc_extreme_parameters_stay_in_range() {
    for &(a, b, x) in &[(1000.0, 1000.0, 0.5), (1e-3, 1.0, 1e-10), (1e-3, 1e-3, 0.5), (500.0, 0.5, 0.999)] {
        let v = betainc(a, b, x).unwrap();
        assert!((0.0..=1.0).contains(&v), "I_{x}({a}, {b}) = {v}");
    }
}

#[test]
fn betainc_domain_errors() {
    assert_eq!(betainc(0.0_f64, 1.0, 0.5).unwrap_err(), SpecialError::DomainError);
    assert_eq!(betainc(1.0_f64, -2.0, 0.5).unwrap_err(), SpecialError::DomainError);
    assert_eq!(betainc(1.0_f64, 1.0, -0.1).unwrap_err(), SpecialError::DomainError);
    assert_eq!(betainc(1.0_f64, 1.0, 1.1).unwrap_err(), SpecialError::DomainError);
    assert_eq!(betainc(1.0_f64, 1.0, f64::NAN).unwrap_err(), SpecialError::DomainError);
    assert_eq!(betainc(f64::NAN, 1.0, 0.5).unwrap_err(), SpecialError::DomainError);
}

#[test]
fn betainc_propagates_cf_failure() {
    let s = CfSettings {
        max_iter: 2,
        ..CfSettings::<f64>::default()
    };
    assert_eq!(
        betainc_with(40.0_f64, 60.0, 0.4, &s).unwrap_err(),
        SpecialError::ConvergenceFailure
    );
}

#[test]
fn betainc_f32() {
    approx_eq_f32(betainc(2.0_f32, 2.0, 0.5).unwrap(), 0.5, 1e-5);
    approx_eq_f32(betainc(1.0_f32, 1.0, 0.3).unwrap(), 0.3, 1e-5);
}

#[test]
fn error_display() {
    use core::fmt::Write;
    let mut s = alloc::string::String::new();
    write!(s, "{}", SpecialError::ConvergenceFailure).unwrap();
    assert!(s.contains("converge"));
    s.clear();
    write!(s, "{}", SpecialError::DomainError).unwrap();
    assert!(s.contains("domain"));
}
