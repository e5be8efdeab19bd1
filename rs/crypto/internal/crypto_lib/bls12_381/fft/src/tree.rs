//! Subproduct trees, vanishing polynomials and multi-point evaluation

use crate::domain::Domain;
use crate::field::FieldElement;
use crate::poly::Polynomial;
use crate::{FftError, FftResult};


/// Binary tree of products of linear factors
///
/// Level 0 holds the factors `x - a_i`; each polynomial on level `k` is the
/// product of two adjacent polynomials on level `k - 1`, and the single
/// polynomial on the top level vanishes exactly on all the `a_i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubproductTree<F> {
    levels: Vec<Vec<Polynomial<F>>>,
}

impl<F: FieldElement> SubproductTree<F> {
    pub fn levels(&self) -> &[Vec<Polynomial<F>>] {
        &self.levels
    }

    /// Number of levels above the leaves
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// The product of all the linear factors
    pub fn root(&self) -> &Polynomial<F> {
        &self.levels[self.height()][0]
    }

    /// Level `k` must hold exactly `2^(height - k)` polynomials
    pub fn check_balanced(&self) -> FftResult<()> {
        let height = self.height();
        for (level, polys) in self.levels.iter().enumerate() {
            if polys.len() != 1 << (height - level) {
                return Err(FftError::UnbalancedTree { level });
            }
        }
        Ok(())
    }

    /// Split every level in half, giving the trees for the left and the
    /// right half of the points
    pub fn split(&self) -> FftResult<(Self, Self)> {
        self.check_balanced()?;
        if self.height() == 0 {
            return Err(FftError::CannotSplitLeaf);
        }
        let (left, right): (Vec<_>, Vec<_>) = self.levels[..self.height()]
            .iter()
            .map(|polys| {
                let (l, r) = polys.split_at(polys.len() / 2);
                (l.to_vec(), r.to_vec())
            })
            .unzip();
        Ok((Self { levels: left }, Self { levels: right }))
    }
}

impl<F: FieldElement> Domain<F> {
    /// Build the subproduct tree over `points`
    ///
    /// The number of points must be a power of two.
    pub fn subproduct_tree(&self, points: &[F]) -> FftResult<SubproductTree<F>> {
        if !points.len().is_power_of_two() {
            return Err(FftError::NotPowerOfTwo { len: points.len() });
        }

        let height = points.len().trailing_zeros() as usize;
        let mut levels: Vec<Vec<Polynomial<F>>> = Vec::with_capacity(height + 1);
        levels.push(points.iter().map(Polynomial::linear_factor).collect());
        for _ in 0..height {
            let next = self.pairwise_products(&levels[levels.len() - 1])?;
            levels.push(next);
        }
        Ok(SubproductTree { levels })
    }

    /// The monic polynomial whose roots are exactly `points`
    ///
    /// Any number of points is accepted; the product of no points is the
    /// constant one.
    pub fn vanishing_polynomial(&self, points: &[F]) -> FftResult<Polynomial<F>> {
        let n = points.len().max(1).next_power_of_two();
        let mut level: Vec<Polynomial<F>> = points
            .iter()
            .map(Polynomial::linear_factor)
            .chain(std::iter::repeat_with(Polynomial::one))
            .take(n)
            .collect();
        while level.len() > 1 {
            level = self.pairwise_products(&level)?;
        }
        level
            .pop()
            .ok_or_else(|| FftError::InvariantViolation("empty product tree".to_string()))
    }

    /// Evaluate `f` at each point at the leaves of `tree`, in leaf order
    ///
    /// Works by reducing `f` modulo the two children of each node and
    /// recursing, so each step only handles polynomials of about half the
    /// degree of the previous one. Requires `2^height >= f.num_coefficients()`.
    pub fn multi_evaluate(
        &self,
        f: &Polynomial<F>,
        tree: &SubproductTree<F>,
    ) -> FftResult<Vec<F>> {
        tree.check_balanced()?;
        let height = tree.height();
        if height >= usize::BITS as usize || (1usize << height) < f.num_coefficients() {
            return Err(FftError::TreeTooSmall {
                height,
                len: f.num_coefficients(),
            });
        }
        let mut out = Vec::with_capacity(tree.leaf_count());
        evaluate_node(f, tree, height, 0, &mut out)?;
        Ok(out)
    }

    fn pairwise_products(&self, polys: &[Polynomial<F>]) -> FftResult<Vec<Polynomial<F>>> {
        polys
            .chunks(2)
            .map(|pair| match pair {
                [x, y] => self.mul(x, y),
                [x] => Ok(x.clone()),
                _ => Err(FftError::InvariantViolation("empty chunk".to_string())),
            })
            .collect()
    }
}

/// Evaluate `f` on the leaves below node `index` of `level`, appending the
/// values to `out`
///
/// `f` must already be reduced modulo that node's polynomial, so a constant
/// `f` is the value at every leaf below the node.
fn evaluate_node<F: FieldElement>(
    f: &Polynomial<F>,
    tree: &SubproductTree<F>,
    level: usize,
    index: usize,
    out: &mut Vec<F>,
) -> FftResult<()> {
    if f.num_coefficients() == 1 {
        out.extend(std::iter::repeat(f.coeff(0)).take(1 << level));
        return Ok(());
    }
    if level == 0 {
        let leaf = &tree.levels()[0][index];
        out.push(f.remainder(leaf)?.coeff(0));
        return Ok(());
    }
    for child in [2 * index, 2 * index + 1] {
        let reduced = f.remainder(&tree.levels()[level - 1][child])?;
        evaluate_node(&reduced, tree, level - 1, child, out)?;
    }
    Ok(())
}
