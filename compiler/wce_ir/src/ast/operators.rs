//! Binary operators.

/// Binary operators, assignment included.
///
/// The source grammar treats `=` as the lowest, right-associative level of
/// the same precedence ladder as the arithmetic and comparison operators,
/// so it shares this enum rather than getting a node kind of its own.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Multiplicative
    Mul,
    Div,

    // Additive
    Add,
    Sub,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Equality
    Eq,
    NotEq,

    Assign,
}

impl BinaryOp {
    /// Source-level symbol, also used verbatim in generated code.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Assign => "=",
        }
    }

    /// Binding strength. Higher binds tighter.
    ///
    /// - 5: `*` `/`
    /// - 4: `+` `-`
    /// - 3: `<` `<=` `>` `>=`
    /// - 2: `==` `!=`
    /// - 1: `=`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 5,
            Self::Add | Self::Sub => 4,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 3,
            Self::Eq | Self::NotEq => 2,
            Self::Assign => 1,
        }
    }

    /// Only assignment groups to the right (`a = b = c` is `a = (b = c)`).
    #[inline]
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, Self::Assign)
    }
}
