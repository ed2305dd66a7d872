use super::*;

#[test]
fn can_collect_in_original_order() {
    let source = (0..100).collect::<Vec<usize>>();

    let result = parallel_into_collect(source, |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_use_foreach_mut() {
    let mut source = vec![1, 2, 3];

    parallel_foreach_mut(source.as_mut_slice(), |item| *item += 1);

    assert_eq!(source, vec![2, 3, 4]);
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2);

    let result = pool.execute(|| parallel_into_collect(vec![1, 2, 3], |item| item + 1));

    assert_eq!(result, vec![2, 3, 4]);
}
