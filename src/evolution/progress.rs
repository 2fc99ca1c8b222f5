/// One row of run history, appended after every epoch.
///
/// [`ProgressRow::to_record`] flattens the row in the column order given by
/// [`ProgressRow::header`]:
/// `Epoch, Population Size, Current Best Fitness, X1..Xn,
/// Best Fitness All Time, Best X1..Best Xn`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Collection size at the time the epoch was evaluated.
    pub population_size: usize,
    pub current_best_fitness: f64,
    pub current_best_variables: Vec<f64>,
    pub best_fitness: f64,
    pub best_variables: Vec<f64>,
}

impl ProgressRow {
    /// Column names for a run over `num_variables` variables.
    pub fn header(num_variables: usize) -> Vec<String> {
        let mut columns = vec![
            "Epoch".to_string(),
            "Population Size".to_string(),
            "Current Best Fitness".to_string(),
        ];
        columns.extend((1..=num_variables).map(|i| format!("X{}", i)));
        columns.push("Best Fitness All Time".to_string());
        columns.extend((1..=num_variables).map(|i| format!("Best X{}", i)));
        columns
    }

    pub fn to_record(&self) -> Vec<f64> {
        let mut record = Vec::with_capacity(4 + 2 * self.current_best_variables.len());
        record.push(self.epoch as f64);
        record.push(self.population_size as f64);
        record.push(self.current_best_fitness);
        record.extend_from_slice(&self.current_best_variables);
        record.push(self.best_fitness);
        record.extend_from_slice(&self.best_variables);
        record
    }
}
