/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the single item partial update operation
pub mod update_item;

/// Types for the file ingest operation
pub mod ingest;
