mod fake;
mod symbol;
