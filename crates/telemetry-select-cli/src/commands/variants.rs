use telemetry_select_core::Family;

pub fn run() {
    print!("{}", render());
}

pub fn render() -> String {
    let mut out = String::new();
    for family in Family::ALL {
        out.push_str(&format!("{family} (control: {})\n", family.control_variant()));
        for v in family.variants() {
            out.push_str(&format!("  {:<30} {}\n", v.name(), v.description()));
        }
        out.push('\n');
    }
    out
}
