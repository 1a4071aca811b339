/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `2^3 = 8`
    /// etc.
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a-a = 0`
    SubtractSelf,

    /// `a+a = 2a`
    /// `2a-1a = 1a`
    CombineLikeTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a*a = a^2`
    /// `a*2a = 2*a^2`
    CombineLikeFactors,

    /// `3*2a = 6a`
    /// `3*sin(a) = 3sin(a)`
    MultiplyCoefficient,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `6a/3a = 2`
    /// `6a/3 = 2a`
    ReduceFraction,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,
}
