mod create;
mod delete_if_stopped;

use super::*;
use entity::prelude::Server as ServerEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
