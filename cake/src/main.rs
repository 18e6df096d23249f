// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! cake - never miss a friend's birthday

use std::error::Error;

use cake_cli::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run().await
}
