mod status;

use super::*;
use entity::prelude::Server as ServerEntity;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn create_param(name: &str, address: &str) -> CreateServerParam {
    CreateServerParam {
        name: name.to_string(),
        address: address.to_string(),
    }
}
