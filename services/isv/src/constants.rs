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

// Headers written by the signer.
pub const X_AUTHENTICATION_VERSION: &str = "x-authentication-version";
pub const X_AUTHENTICATION_TYPE: &str = "x-authentication-type";
pub const X_SIGNATURE_METHOD: &str = "x-signature-method";
pub const X_ISV_AK: &str = "x-isv-ak";
pub const X_SIGNATURE: &str = "x-signature";
pub const X_TENANT_ID: &str = "x-tenant-id";

// Fixed header values.
pub const AUTHENTICATION_VERSION: &str = "1.0";
pub const AUTHENTICATION_TYPE: &str = "isv";
pub const SIGNATURE_METHOD: &str = "SHA256_HMAC";

// Env values used in isv services.
pub const ISV_ACCESS_KEY_ID: &str = "ISV_ACCESS_KEY_ID";
pub const ISV_SECRET_ACCESS_KEY: &str = "ISV_SECRET_ACCESS_KEY";
pub const ISV_TENANT_ID: &str = "ISV_TENANT_ID";
pub const ISV_PROFILE: &str = "ISV_PROFILE";
pub const ISV_SHARED_CREDENTIALS_FILE: &str = "ISV_SHARED_CREDENTIALS_FILE";

// Keys in the shared credentials file.
pub const PROFILE_ACCESS_KEY_ID: &str = "isv_access_key_id";
pub const PROFILE_SECRET_ACCESS_KEY: &str = "isv_secret_access_key";
pub const DEFAULT_CREDENTIALS_FILE: &str = "~/.isv/credentials";
pub const DEFAULT_PROFILE: &str = "default";
