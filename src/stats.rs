use claim::{debug_assert_ge, debug_assert_le};
use ndarray::{ArrayView1, Zip};
use statrs::distribution::{ChiSquared, ContinuousCDF};

const EPS: f64 = 1e-10;

/// Return true iff `supp(p) ⊆ supp(q)` for dense PMFs `p` and `q`.
pub(crate) fn is_pmf_subset(p: ArrayView1<f64>, q: ArrayView1<f64>) -> bool {
    Zip::from(p).and(q).all(|&p_i, &q_i| {
        // A = (q_i == 0.0)
        // B = (p_i == 0.0)
        // (A ==> B) <==> (¬A ∨ B)
        (q_i > 0.0) || (p_i <= 0.0)
    })
}

/// Compute the [KL-divergence](https://www.wikiwand.com/en/Kullback%E2%80%93Leibler_divergence)
/// between dense PMFs `p` and `q`.
///
/// `D_{KL}(p || q) = \sum_i p_i * \ln(p_i / q_i)`
///
/// Note: p's support must be a strict subset of q's support!
///       this is also referred to as the "absolute continuity" assumption,
///       where `q_i = 0` implies `p_i = 0`.
pub(crate) fn kl_divergence(p: ArrayView1<f64>, q: ArrayView1<f64>) -> f64 {
    // caller should check this before
    debug_assert!(is_pmf_subset(p, q));

    Zip::from(p)
        .and(q)
        .fold(0.0, |sum, &p_i, &q_i| sum + kl_div_term(p_i, q_i))
}

#[inline]
fn kl_div_term(p_i: f64, q_i: f64) -> f64 {
    if q_i > EPS {
        if p_i > EPS {
            p_i * (p_i / q_i).ln()
        } else {
            0.0
        }
    } else if p_i > EPS {
        debug_assert!(false);
        f64::INFINITY
    } else {
        0.0
    }
}

/// The G-test statistic.
///
/// * Used for comparing observed multinomial distribution with expected
///   hypothesis multinomial distribution.
/// * Asymptotically approximates the chi^2-test statistic.
///
/// `n`: the number of samples
/// `p`: the expected PMF
/// `p_hat`: the observed PMF
///
/// G-test: https://www.wikiwand.com/en/G-test
pub(crate) fn g_test(n: usize, p: ArrayView1<f64>, p_hat: ArrayView1<f64>) -> f64 {
    (n as f64) * (2.0 * kl_divergence(p_hat, p))
}

/// The CDF of the Chi^2-distribution, where `dof` is the
/// "degrees-of-freedom" parameter and `x ∈ R`.
pub(crate) fn chisq_cdf(dof: f64, x: f64) -> f64 {
    ChiSquared::new(dof).unwrap().cdf(x)
}

/// A goodness-of-fit test between a hypothesized multinomial distribution, `p`,
/// and an experimentally observed distribution, `p_hat`, both represented as
/// dense PMFs. `n` is the number of samples taken to construct `p_hat`.
///
/// Returns a p-value, `Pr[G(x) >= p-value | H_0: x ~ p]`.
pub(crate) fn multinomial_test(n: usize, p: ArrayView1<f64>, p_hat: ArrayView1<f64>) -> f64 {
    // want to compute the DOF (nnz of p)
    let nnz = p.fold(0.0, |nnz, &x| nnz + if x > 0.0 { 1.0 } else { 0.0 });
    let dof = nnz - 1.0;

    debug_assert_le!(nnz, p.dim() as f64);
    debug_assert_ge!(dof, 1.0);

    // impossible to draw p_hat from p
    if !is_pmf_subset(p_hat, p) {
        return 0.0;
    }

    let g = g_test(n, p, p_hat);
    1.0 - chisq_cdf(dof, g)
}
