use crate::server::data::member::MemberRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
