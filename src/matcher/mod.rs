// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod distribution;
pub mod package;

pub use distribution::{
    ALTERNATE_RUNTIME_ALIASES, DISTRIBUTION_ORDER_OF_PREFERENCE, VENDOR_ALIASES, match_distributions, preference_order,
};
pub use package::{HANDLED_ARCHIVE_TYPES, match_package};
