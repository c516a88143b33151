/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. Operators of equal
    /// precedence associate to the left.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The character the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
