// Copyright (c) 2025 Pono Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Protocol module for the Pono Match service.
//!
//! The service speaks JSON over HTTP; see [`http`] for the endpoints and
//! their wire types.

pub mod http;
