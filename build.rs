#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    res.set("FileDescription", "Luminar CLI")
        .set("ProductName", "Luminar")
        .set("OriginalFilename", "luminar.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed resource metadata");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
