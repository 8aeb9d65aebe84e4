#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Assicurati che res/shiftboard.ico esista
    if !std::path::Path::new("res/shiftboard.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/shiftboard.ico")
        .set("FileDescription", "shiftboard CLI")
        .set("ProductName", "shiftboard")
        .set("OriginalFilename", "shiftboard.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
