/// Builds an AND combinator over the given criteria.
#[macro_export]
macro_rules! and {
    ($($criteria:expr),+ $(,)?) => {
        $crate::ast::criteria::Criteria::Logic($crate::ast::criteria::Logic::new(
            $crate::ast::criteria::LogicOp::And,
            vec![$($criteria),+],
        ))
    };
}

/// Builds an OR combinator over the given criteria.
#[macro_export]
macro_rules! or {
    ($($criteria:expr),+ $(,)?) => {
        $crate::ast::criteria::Criteria::Logic($crate::ast::criteria::Logic::new(
            $crate::ast::criteria::LogicOp::Or,
            vec![$($criteria),+],
        ))
    };
}
