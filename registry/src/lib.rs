use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        book::BookRepositoryImpl, fine::FineRepositoryImpl, health::HealthCheckRepositoryImpl,
        lending::PgLendingStore, loan::LoanRepositoryImpl, member::MemberRepositoryImpl,
    },
};
use kernel::{
    lending::{LendingEngine, LendingOperations},
    repository::{
        book::BookRepository, fine::FineRepository, health::HealthCheckRepository,
        loan::LoanRepository, member::MemberRepository,
    },
    store::LendingStore,
};
use shared::config::AppConfig;

/// アプリケーション全体で共有される DI コンテナ
#[derive(Clone)]
pub struct AppRegistry {
    book_repository: Arc<dyn BookRepository>,
    member_repository: Arc<dyn MemberRepository>,
    loan_repository: Arc<dyn LoanRepository>,
    fine_repository: Arc<dyn FineRepository>,
    lending: Arc<dyn LendingOperations>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, config: AppConfig) -> Self {
        let lending_store: Arc<dyn LendingStore> = Arc::new(PgLendingStore::new(pool.clone()));
        Self {
            book_repository: Arc::new(BookRepositoryImpl::new(pool.clone())),
            member_repository: Arc::new(MemberRepositoryImpl::new(pool.clone())),
            loan_repository: Arc::new(LoanRepositoryImpl::new(pool.clone())),
            fine_repository: Arc::new(FineRepositoryImpl::new(pool.clone())),
            lending: Arc::new(LendingEngine::new(lending_store, config.lending)),
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool)),
        }
    }

    pub fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    pub fn member_repository(&self) -> Arc<dyn MemberRepository> {
        self.member_repository.clone()
    }

    pub fn loan_repository(&self) -> Arc<dyn LoanRepository> {
        self.loan_repository.clone()
    }

    pub fn fine_repository(&self) -> Arc<dyn FineRepository> {
        self.fine_repository.clone()
    }

    pub fn lending(&self) -> Arc<dyn LendingOperations> {
        self.lending.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }
}
