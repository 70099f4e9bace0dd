use crate::token::{CATEGORY_COUNT, Category};

const T: bool = true;
const F: bool = false;

/// Which category may directly follow which.
///
/// Indexed as `TRANSITIONS[from][to]` in [`Category`] declaration order:
/// `Start, End, Number, LeftBracket, RightBracket, Separator, BinaryOperator,
/// UnaryOperator, Variable, Function, Identifier, Operator`.
///
/// Provisional categories have no transitions; they are resolved before the
/// table is consulted. `Separator` has none either, so a `,` is rejected
/// wherever it appears.
#[rustfmt::skip]
pub const TRANSITIONS: [[bool; CATEGORY_COUNT]; CATEGORY_COUNT] = [
    //         Start End Num  LBr  RBr  Sep  Bin  Un   Var  Fn   Id   Op
    /* Start */ [F,  F,  T,   T,   F,   F,   F,   T,   T,   T,   F,   F],
    /* End   */ [F,  F,  F,   F,   F,   F,   F,   F,   F,   F,   F,   F],
    /* Num   */ [F,  T,  F,   F,   T,   F,   T,   F,   F,   F,   F,   F],
    /* LBr   */ [F,  F,  T,   T,   F,   F,   F,   T,   T,   T,   F,   F],
    /* RBr   */ [F,  T,  F,   F,   T,   F,   T,   F,   F,   F,   F,   F],
    /* Sep   */ [F,  F,  F,   F,   F,   F,   F,   F,   F,   F,   F,   F],
    /* Bin   */ [F,  F,  T,   T,   F,   F,   F,   T,   T,   T,   F,   F],
    /* Un    */ [F,  F,  T,   T,   F,   F,   F,   T,   T,   T,   F,   F],
    /* Var   */ [F,  T,  F,   F,   T,   F,   T,   F,   F,   F,   F,   F],
    /* Fn    */ [F,  F,  F,   T,   F,   F,   F,   F,   F,   F,   F,   F],
    /* Id    */ [F,  F,  F,   F,   F,   F,   F,   F,   F,   F,   F,   F],
    /* Op    */ [F,  F,  F,   F,   F,   F,   F,   F,   F,   F,   F,   F],
];

/// Returns `true` when a token of category `to` may follow one of `from`.
///
/// # Example
/// ```
/// use shunt::{interpreter::parser::transition::can_follow, token::Category};
///
/// assert!(can_follow(Category::Start, Category::Number));
/// assert!(!can_follow(Category::Number, Category::Number));
/// assert!(!can_follow(Category::BinaryOperator, Category::RightBracket));
/// assert!(!can_follow(Category::BinaryOperator, Category::End));
/// ```
#[must_use]
pub const fn can_follow(from: Category, to: Category) -> bool {
    TRANSITIONS[from.index()][to.index()]
}
