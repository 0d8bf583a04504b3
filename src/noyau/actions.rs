// src/noyau/actions.rs
//
// Contrat hôte <-> noyau
// ----------------------
// - Action  : une touche, déjà typée (la vue ne transmet jamais de texte brut)
// - Outcome : ce que l’hôte affiche après chaque action

use super::erreurs::{CalcError, ErrorKind};

/// Opérateur binaire en attente de son second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Conversion à la frontière (clavier).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionTag {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log10,
    Exp,
    Pow10,
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Negate,
    ConstantPi,
    ConstantE,
}

impl FunctionTag {
    /// Libellé de touche.
    pub fn label(self) -> &'static str {
        match self {
            FunctionTag::Sin => "sin",
            FunctionTag::Cos => "cos",
            FunctionTag::Tan => "tan",
            FunctionTag::Asin => "asin",
            FunctionTag::Acos => "acos",
            FunctionTag::Atan => "atan",
            FunctionTag::Ln => "ln",
            FunctionTag::Log10 => "log",
            FunctionTag::Exp => "e^x",
            FunctionTag::Pow10 => "10^x",
            FunctionTag::Square => "x^2",
            FunctionTag::Cube => "x^3",
            FunctionTag::Sqrt => "sqrt",
            FunctionTag::Cbrt => "cbrt",
            FunctionTag::Negate => "±",
            FunctionTag::ConstantPi => "π",
            FunctionTag::ConstantE => "e",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryCommand {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
}

impl MemoryCommand {
    pub fn label(self) -> &'static str {
        match self {
            MemoryCommand::Clear => "MC",
            MemoryCommand::Recall => "MR",
            MemoryCommand::Add => "M+",
            MemoryCommand::Subtract => "M-",
            MemoryCommand::Store => "MS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstantTag {
    Pi,
    E,
}

impl ConstantTag {
    /// Fonction sans opérande qui produit la constante.
    pub fn fonction(self) -> FunctionTag {
        match self {
            ConstantTag::Pi => FunctionTag::ConstantPi,
            ConstantTag::E => FunctionTag::ConstantE,
        }
    }

    pub fn label(self) -> &'static str {
        self.fonction().label()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Digit(char),
    Decimal,
    Backspace,
    Operator(Operator),
    Equal,
    OpenParen,
    CloseParen,
    Function(FunctionTag),
    Memory(MemoryCommand),
    Constant(ConstantTag),
    Clear,
    /// "Ans" : rappelle le dernier résultat.
    Answer,
    /// Case "Radians" : false = degrés.
    SetRadians(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CalcError> for ErrorReport {
    fn from(e: &CalcError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub display_text: String,
    pub memory_text: String,
    pub error: Option<ErrorReport>,
}
