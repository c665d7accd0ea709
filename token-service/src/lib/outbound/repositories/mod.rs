pub mod company;
pub mod token;

pub use company::PostgresCompanyRepository;
pub use token::PostgresTokenRepository;
