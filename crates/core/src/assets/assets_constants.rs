/// Default asset class catalogue offered when setting class targets.
pub const INVESTMENT_CLASSES: [&str; 7] = [
    "Ações (BR)",
    "Stocks",
    "FIIs",
    "REITs",
    "Cripto",
    "Renda Fixa (BR)",
    "Renda Fixa Inter.",
];
