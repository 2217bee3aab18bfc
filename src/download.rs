//! Download trigger: serialize a request and hand it to the host.

use crate::export::{
    CsvExportOptions, ExportRequest, Row, TableExport, TextExport, build_file_data,
};
use crate::host::DownloadHost;

/// Trigger a download through an explicit host.
///
/// Control flow: capability probe, serialize, materialize a transient
/// resource, activate a synthesized anchor, release the resource. The
/// resource is revoked unconditionally after the activation attempt; no
/// handle outlives this call.
///
/// Returns `true` once the attempt has been dispatched. This does not wait
/// for (or confirm) the user-side save; "started" is the only guarantee. A
/// `false` return means the host had no download capability and nothing was
/// acquired.
pub fn trigger_download_with<H: DownloadHost>(host: &mut H, request: &ExportRequest) -> bool {
    if !host.is_available() {
        return false;
    }

    let file = build_file_data(request);
    let Some(url) = host.create_resource(&file.content, file.mime_type) else {
        return false;
    };

    host.activate_anchor(&url, request.file_name());
    host.revoke_resource(&url);

    true
}

/// Trigger a download through the environment's default host.
///
/// On wasm targets with the `wasm` feature this uses the browser DOM; on
/// every other target there is no download capability and the result is
/// always `false`.
pub fn trigger_download(request: &ExportRequest) -> bool {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    {
        trigger_download_with(&mut crate::web::BrowserHost, request)
    }
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    {
        trigger_download_with(&mut crate::host::NullHost, request)
    }
}

/// Trigger a CSV download, pre-tagging the request as a table export.
pub fn trigger_csv_download(rows: Vec<Row>, options: CsvExportOptions) -> bool {
    trigger_download(&ExportRequest::Csv(TableExport {
        file_name: options.file_name,
        columns: options.columns,
        rows,
        include_bom: options.include_bom,
    }))
}

/// Trigger a plain-text download.
pub fn trigger_text_download(options: TextExport) -> bool {
    trigger_download(&ExportRequest::Text(options))
}
