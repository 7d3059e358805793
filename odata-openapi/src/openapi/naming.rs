// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Identifier casing helpers for operation ids and parameter names.

#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().chain(chars).collect()
    })
}

#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_lowercase().chain(chars).collect()
    })
}

/// `By{A}And{B}` for a non-empty parameter list, empty otherwise.
#[must_use]
pub fn by_params<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names = names.into_iter().map(upper_first).collect::<Vec<_>>();
    if names.is_empty() {
        String::new()
    } else {
        format!("By{}", names.join("And"))
    }
}

/// Identifier built from a URL path: key expressions dropped,
/// segments reduced to alphanumerics and capitalized.
///
/// `/Orders({Id})/Lines` becomes `OrdersLines`.
#[must_use]
pub fn path_identifier(path: &str) -> String {
    path_segments(path)
        .map(|s| upper_first(&s.chars().filter(char::is_ascii_alphanumeric).collect::<String>()))
        .collect()
}

/// Path segments with key expressions stripped.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .map(|s| s.split_once('(').map_or(s, |(name, _)| name))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casing() {
        assert_eq!(upper_first("orders"), "Orders");
        assert_eq!(lower_first("GetTopOrders"), "getTopOrders");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn by() {
        assert_eq!(by_params(["count", "skip"]), "ByCountAndSkip");
        assert_eq!(by_params(Vec::<&str>::new()), "");
    }

    #[test]
    fn identifiers_from_paths() {
        assert_eq!(path_identifier("/Orders({Id})/Lines"), "OrdersLines");
        assert_eq!(path_identifier("/Order_Details('{k}')"), "OrderDetails");
        assert_eq!(
            path_segments("/Orders({Id})/Lines({orderLineNo})").collect::<Vec<_>>(),
            vec!["Orders", "Lines"]
        );
    }
}
