use crate::server::data::catalog::CatalogRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
