use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub lending: LendingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("DATABASE_PORT")
                .unwrap_or_else(|_| "5432".into())
                .parse()?,
            username: std::env::var("DATABASE_USERNAME").unwrap_or_else(|_| "app".into()),
            password: std::env::var("DATABASE_PASSWORD").unwrap_or_else(|_| "passwd".into()),
            database: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "library".into()),
        };
        let lending = LendingConfig {
            loan_period_days: std::env::var("LOAN_PERIOD_DAYS")
                .unwrap_or_else(|_| "14".into())
                .parse()?,
            daily_fine_rate: std::env::var("DAILY_FINE_RATE")
                .unwrap_or_else(|_| "0.5".into())
                .parse()?,
        };
        Ok(Self { database, lending })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

// 貸出期間と延滞料金は環境変数で差し替えられる
#[derive(Debug, Clone, Copy)]
pub struct LendingConfig {
    pub loan_period_days: i64,
    pub daily_fine_rate: f64,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            daily_fine_rate: 0.5,
        }
    }
}
