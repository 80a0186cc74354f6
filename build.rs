use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=wifi_config.h");
    println!("cargo:rerun-if-changed=sdkconfig.defaults");

    // Wi-Fi credentials are compiled in; the file stays out of git
    let wifi_config_path = "wifi_config.h";
    let (ssid, password) = if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;
        (
            quoted_define(&contents, "WIFI_SSID").unwrap_or_default(),
            quoted_define(&contents, "WIFI_PASSWORD").unwrap_or_default(),
        )
    } else {
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
        (String::new(), String::new())
    };

    println!("cargo:rustc-env=WIFI_SSID={}", ssid);
    println!("cargo:rustc-env=WIFI_PASSWORD={}", password);

    Ok(())
}

/// Value of `#define NAME "value"`
fn quoted_define(contents: &str, name: &str) -> Option<String> {
    let prefix = format!("#define {}", name);
    contents
        .lines()
        .find(|l| l.trim_start().starts_with(&prefix))
        .and_then(|l| l.split('"').nth(1))
        .map(str::to_string)
}
