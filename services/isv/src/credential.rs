// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use isvsign_core::{utils::Redact, SigningCredential};

/// Credential for isv services.
///
/// The secret is used as the HMAC key in its UTF-8 form.
#[derive(Clone, Default)]
pub struct Credential {
    /// Access key id, sent as `x-isv-ak`.
    pub access_key_id: String,
    /// Secret access key, never sent nor logged.
    pub secret_access_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_is_valid() {
        assert!(Credential::new("AK1", "SK1").is_valid());
        assert!(!Credential::new("", "SK1").is_valid());
        assert!(!Credential::new("AK1", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new("pzeUK+obho+uFPeS", "73y8jTkIr64Tw826");
        let s = format!("{cred:?}");

        assert!(!s.contains("73y8jTkIr64Tw826"));
        assert!(!s.contains("pzeUK+obho+uFPeS"));
        assert!(s.contains("pze***PeS"));
    }
}
