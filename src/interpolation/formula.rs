//! Formula rendering for [`Sequence`].
//!
//! Renders the interpolating polynomial as a plain-text formula and as a
//! LaTeX expression. Both renderers walk the stored terms/coefficients
//! from highest order down to the constant term and never mutate the
//! engine; the [`Sequence`] invariant `t[k] - c[k-1] = Δᵏt[0]` makes each
//! emitted numerator the k-th forward difference.


use std::fmt::Write;

use crate::interpolation::sequence::Sequence;


impl Sequence {
    /// Renders the polynomial as a plain-text formula.
    ///
    /// # Behavior
    /// - Terms are emitted from highest order down to order 1, each as
    ///   `(term - coefficient)(n-1)(n-2)...(n-j)/j!`, joined with `" + "`;
    ///   the constant `t[0]` comes last with no trailing operator.
    /// - A single-term sequence renders as `"f(n) = t[0]"`.
    pub fn to_formula(&self) -> String {
        let mut out = String::from("f(n) = ");

        for k in (2..=self.terms.len()).rev() {
            let order = k - 1;

            let _ = write!(
                out,
                "({} - {})",
                self.terms[k - 1],
                self.coefficients[k - 2],
            );
            for j in 1..=order {
                let _ = write!(out, "(n-{j})");
            }
            let _ = write!(out, "/{order}! + ");
        }

        let _ = write!(out, "{}", self.terms[0]);
        out
    }

    /// Renders the polynomial as a LaTeX expression body.
    ///
    /// # Behavior
    /// - Same decomposition as [`Sequence::to_formula`], but each
    ///   falling-factorial/factorial pair becomes
    ///   `\frac{\displaystyle\prod_{k=1}^{j}(n-k)}{j!}` and terms are
    ///   joined with a LaTeX line break (`\\ + `).
    /// - No surrounding `$$` delimiters; the caller supplies those.
    pub fn to_latex(&self) -> String {
        let mut out = String::from("f(n) = ");

        for k in (2..=self.terms.len()).rev() {
            let order = k - 1;

            let _ = write!(
                out,
                "({} - {})\\frac{{\\displaystyle\\prod_{{k=1}}^{{{order}}}(n-k)}}{{{order}!}}\\\\ + ",
                self.terms[k - 1],
                self.coefficients[k - 2],
            );
        }

        let _ = write!(out, "{}", self.terms[0]);
        out
    }
}
