fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Build date shown by `pagekit --version`
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
