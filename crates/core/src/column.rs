use std::fmt;

/// The six columns of a movements table, in the order the bank prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Date,
    Description,
    Reference,
    Debit,
    Credit,
    Balance,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Date,
        Column::Description,
        Column::Reference,
        Column::Debit,
        Column::Credit,
        Column::Balance,
    ];

    /// Header text printed on the statement for this column.
    pub fn label(self) -> &'static str {
        match self {
            Column::Date => "Fecha",
            Column::Description => "Conceptos",
            Column::Reference => "Referencias",
            Column::Debit => "Débitos",
            Column::Credit => "Créditos",
            Column::Balance => "Saldo",
        }
    }

    /// Amount columns are right-aligned and hold currency values.
    pub fn is_amount(self) -> bool {
        matches!(self, Column::Debit | Column::Credit | Column::Balance)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_rank_order() {
        for (i, c) in Column::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn only_trailing_three_are_amounts() {
        let amounts: Vec<_> = Column::ALL.into_iter().filter(|c| c.is_amount()).collect();
        assert_eq!(amounts, vec![Column::Debit, Column::Credit, Column::Balance]);
    }

    #[test]
    fn labels_are_accented() {
        assert_eq!(Column::Debit.to_string(), "Débitos");
        assert_eq!(Column::Credit.label(), "Créditos");
    }
}
