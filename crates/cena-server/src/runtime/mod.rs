// SPDX-License-Identifier: Apache-2.0

mod server_runtime_app;

pub use server_runtime_app::build_router;
