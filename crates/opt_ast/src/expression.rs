//! Core expression node types and tree operations.

/// Payload of a numeric leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeric {
    /// A concrete unsigned value.
    Value(u64),
    /// The pattern wildcard. Matches every numeric leaf.
    Any,
}

impl Numeric {
    /// The concrete value, or `None` for the wildcard.
    pub fn as_value(self) -> Option<u64> {
        match self {
            Numeric::Value(v) => Some(v),
            Numeric::Any => None,
        }
    }
}

/// Discriminant of an [`Expr`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Number,
    Add,
}

/// A node in an expression tree.
///
/// Subject expressions, rule patterns, and rule templates all share this one
/// representation. Wildcards and binding names only mean something to the
/// rewrite engine; plain data never needs either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A numeric leaf.
    Number {
        value: Numeric,
        binding: Option<String>,
    },
    /// A binary addition over two owned subtrees.
    Add {
        left: Box<Expr>,
        right: Box<Expr>,
        binding: Option<String>,
    },
}

// Helper constructors so call sites stay free of Box noise.
impl Expr {
    /// A concrete numeric leaf.
    pub fn num(value: u64) -> Self {
        Expr::number(Numeric::Value(value))
    }

    /// A concrete numeric leaf carrying a binding name.
    pub fn num_bound(value: u64, binding: &str) -> Self {
        Expr::number_bound(Numeric::Value(value), binding)
    }

    /// The unnamed wildcard leaf.
    pub fn any() -> Self {
        Expr::number(Numeric::Any)
    }

    /// A wildcard leaf carrying a binding name.
    pub fn any_bound(binding: &str) -> Self {
        Expr::number_bound(Numeric::Any, binding)
    }

    /// A numeric leaf from an explicit [`Numeric`].
    pub fn number(value: Numeric) -> Self {
        Expr::Number {
            value,
            binding: None,
        }
    }

    /// A numeric leaf from an explicit [`Numeric`], carrying a binding name.
    pub fn number_bound(value: Numeric, binding: &str) -> Self {
        Expr::Number {
            value,
            binding: Some(binding.to_string()),
        }
    }

    /// An addition node over two subtrees.
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add {
            left: Box::new(left),
            right: Box::new(right),
            binding: None,
        }
    }

    /// An addition node carrying a binding name.
    pub fn add_bound(left: Expr, right: Expr, binding: &str) -> Self {
        Expr::Add {
            left: Box::new(left),
            right: Box::new(right),
            binding: Some(binding.to_string()),
        }
    }
}

impl Expr {
    /// Which node kind this is.
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Number { .. } => ExprKind::Number,
            Expr::Add { .. } => ExprKind::Add,
        }
    }

    /// The binding name attached to this node, if any.
    pub fn binding(&self) -> Option<&str> {
        match self {
            Expr::Number { binding, .. } | Expr::Add { binding, .. } => binding.as_deref(),
        }
    }

    /// The numeric payload of a leaf. `None` for addition nodes.
    pub fn value(&self) -> Option<Numeric> {
        match self {
            Expr::Number { value, .. } => Some(*value),
            Expr::Add { .. } => None,
        }
    }

    /// The concrete value of a leaf. `None` for additions and wildcards.
    pub fn as_number(&self) -> Option<u64> {
        self.value().and_then(Numeric::as_value)
    }

    /// Left child of an addition. `None` for leaves.
    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Add { left, .. } => Some(left),
            Expr::Number { .. } => None,
        }
    }

    /// Right child of an addition. `None` for leaves.
    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Add { right, .. } => Some(right),
            Expr::Number { .. } => None,
        }
    }

    /// Swap in a new left subtree, dropping the old one.
    ///
    /// # Panics
    ///
    /// Panics when called on a numeric leaf.
    pub fn replace_left(&mut self, new_left: Expr) {
        match self {
            Expr::Add { left, .. } => *left = Box::new(new_left),
            Expr::Number { .. } => panic!("replace_left called on a numeric leaf"),
        }
    }

    /// Swap in a new right subtree, dropping the old one.
    ///
    /// # Panics
    ///
    /// Panics when called on a numeric leaf.
    pub fn replace_right(&mut self, new_right: Expr) {
        match self {
            Expr::Add { right, .. } => *right = Box::new(new_right),
            Expr::Number { .. } => panic!("replace_right called on a numeric leaf"),
        }
    }

    /// Fold the tree down to its numeric value.
    ///
    /// # Panics
    ///
    /// Panics when the tree contains a wildcard leaf. Wildcards belong to
    /// rule patterns; evaluating one means pattern material leaked into data.
    pub fn evaluate(&self) -> u64 {
        match self {
            Expr::Number {
                value: Numeric::Value(v),
                ..
            } => *v,
            Expr::Number {
                value: Numeric::Any,
                ..
            } => panic!("evaluate called on a wildcard leaf"),
            Expr::Add { left, right, .. } => left.evaluate() + right.evaluate(),
        }
    }
}
