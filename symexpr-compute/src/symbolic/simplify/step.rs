/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `+a = a`
    UnaryPlus,

    /// `2+3 = 5`
    AddConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `5-3 = 2`
    SubtractConstants,

    /// `a-a = 0`
    SubtractSelf,

    /// `2*3 = 6`
    MultiplyConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `6/3 = 2`
    DivideConstants,

    /// `a/1 = a`
    DivideOne,
}
