// SPDX-License-Identifier: Apache-2.0

pub(crate) mod error_rendering;
pub(crate) mod request_tracing;
