fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");
        res.set("ProductName", "News Story");
        res.set("FileDescription", "News story viewer");
        res.compile().expect("Failed to compile Windows resources");
    }
}
