use super::*;

#[test]
fn can_write_rows_into_vec() {
    let mut writer: Vec<Vec<f64>> = vec![];

    writer.write(&[1., 2.]).unwrap();
    writer.write(&[3.]).unwrap();
    writer.flush().unwrap();

    assert_eq!(writer, vec![vec![1., 2.], vec![3.]]);
}
