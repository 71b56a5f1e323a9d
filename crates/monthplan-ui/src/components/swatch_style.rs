pub fn filled_style(
  color: &str
) -> String {
  format!(
    "background-color:{color};\
     border-color:{color};color:#fff;"
  )
}

pub fn outlined_style(
  color: &str
) -> String {
  format!(
    "border-color:{color};color:{color};"
  )
}

pub fn dot_style(color: &str) -> String {
  format!("background-color:{color};")
}
