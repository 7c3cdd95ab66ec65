use super::SeaOrmStorage;
use crate::entity::books::{ActiveModel, Column, Entity as Books};
use crate::entity::borrowings::{
    ActiveModel as BorrowingActiveModel, Column as BorrowingColumn, Entity as Borrowings,
};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    library::{
        entities::{Book, Borrowing},
        requests::{BookListQuery, BorrowingListQuery, CreateBookRequest, UpdateBookRequest},
        responses::{BookListResponse, BorrowingListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 新增馆藏
    pub async fn create_book_impl(&self, req: CreateBookRequest) -> Result<Book> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            isbn: Set(req.isbn),
            title: Set(req.title),
            author: Set(req.author),
            total_copies: Set(req.total_copies),
            available_copies: Set(req.total_copies),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("新增馆藏失败: {e}")))?;

        Ok(result.into_book())
    }

    /// 通过 ID 获取图书
    pub async fn get_book_by_id_impl(&self, id: i64) -> Result<Option<Book>> {
        let result = Books::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书失败: {e}")))?;

        Ok(result.map(|m| m.into_book()))
    }

    /// 通过 ISBN 获取图书
    pub async fn get_book_by_isbn_impl(&self, isbn: &str) -> Result<Option<Book>> {
        let result = Books::find()
            .filter(Column::Isbn.eq(isbn))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书失败: {e}")))?;

        Ok(result.map(|m| m.into_book()))
    }

    /// 分页列出图书
    pub async fn list_books_with_pagination_impl(
        &self,
        query: BookListQuery,
    ) -> Result<BookListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Books::find();

        // 按书名、作者或 ISBN 搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Author.contains(&escaped))
                    .add(Column::Isbn.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Title);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书页数失败: {e}")))?;

        let books = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书列表失败: {e}")))?;

        Ok(BookListResponse {
            items: books.into_iter().map(|m| m.into_book()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新馆藏
    ///
    /// 调整 total_copies 时按当前借出量同步 available_copies。
    pub async fn update_book_impl(
        &self,
        id: i64,
        update: UpdateBookRequest,
    ) -> Result<Option<Book>> {
        let existing = match Books::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(author) = update.author {
            model.author = Set(author);
        }

        if let Some(total_copies) = update.total_copies {
            let borrowed = existing.total_copies - existing.available_copies;
            if total_copies < borrowed {
                return Err(PortalError::validation(format!(
                    "馆藏数量不能少于已借出数量: {borrowed}"
                )));
            }
            model.total_copies = Set(total_copies);
            model.available_copies = Set(total_copies - borrowed);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新馆藏失败: {e}")))?;

        Ok(Some(result.into_book()))
    }

    /// 删除馆藏
    pub async fn delete_book_impl(&self, id: i64) -> Result<bool> {
        let result = Books::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除馆藏失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 借书
    ///
    /// 校验在馆余量并扣减，借阅记录与余量更新落在同一事务里。
    pub async fn create_borrowing_impl(
        &self,
        book_id: i64,
        user_id: i64,
        due_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Borrowing> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let book = Books::find_by_id(book_id)
            .one(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书失败: {e}")))?
            .ok_or_else(|| PortalError::not_found("图书不存在"))?;

        if book.available_copies <= 0 {
            return Err(PortalError::conflict("该图书已无在馆副本"));
        }

        ActiveModel {
            id: Set(book_id),
            available_copies: Set(book.available_copies - 1),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("扣减在馆余量失败: {e}")))?;

        let borrowing = BorrowingActiveModel {
            book_id: Set(book_id),
            user_id: Set(user_id),
            borrowed_at: Set(now),
            due_at: Set(due_at.timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("创建借阅记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(borrowing.into_borrowing())
    }

    /// 还书
    ///
    /// 落归还时间与罚金并回补在馆余量，同一事务。
    pub async fn return_borrowing_impl(&self, borrowing_id: i64, fine: f64) -> Result<Borrowing> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let borrowing = Borrowings::find_by_id(borrowing_id)
            .one(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅记录失败: {e}")))?
            .ok_or_else(|| PortalError::not_found("借阅记录不存在"))?;

        if borrowing.returned_at.is_some() {
            return Err(PortalError::conflict("该借阅已归还"));
        }

        let updated = BorrowingActiveModel {
            id: Set(borrowing_id),
            returned_at: Set(Some(now)),
            fine: Set(Some(fine)),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("更新借阅记录失败: {e}")))?;

        let book = Books::find_by_id(borrowing.book_id)
            .one(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询图书失败: {e}")))?
            .ok_or_else(|| PortalError::not_found("图书不存在"))?;

        // 回补不超过馆藏总量
        let available = (book.available_copies + 1).min(book.total_copies);
        ActiveModel {
            id: Set(book.id),
            available_copies: Set(available),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| PortalError::database_operation(format!("回补在馆余量失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_borrowing())
    }

    /// 通过 ID 获取借阅记录
    pub async fn get_borrowing_by_id_impl(&self, id: i64) -> Result<Option<Borrowing>> {
        let result = Borrowings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅记录失败: {e}")))?;

        Ok(result.map(|m| m.into_borrowing()))
    }

    /// 某用户对某书未归还的借阅记录
    pub async fn get_outstanding_borrowing_impl(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<Borrowing>> {
        let result = Borrowings::find()
            .filter(BorrowingColumn::BookId.eq(book_id))
            .filter(BorrowingColumn::UserId.eq(user_id))
            .filter(BorrowingColumn::ReturnedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅记录失败: {e}")))?;

        Ok(result.map(|m| m.into_borrowing()))
    }

    /// 分页列出借阅记录（附书名）
    pub async fn list_borrowings_with_pagination_impl(
        &self,
        query: BorrowingListQuery,
    ) -> Result<BorrowingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Borrowings::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(BorrowingColumn::UserId.eq(user_id));
        }

        if let Some(book_id) = query.book_id {
            select = select.filter(BorrowingColumn::BookId.eq(book_id));
        }

        if query.outstanding_only.unwrap_or(false) {
            select = select.filter(BorrowingColumn::ReturnedAt.is_null());
        }

        select = select.order_by_desc(BorrowingColumn::BorrowedAt);

        let paginator = select.find_also_related(Books).paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询借阅列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .map(|(borrowing, book)| {
                let mut b = borrowing.into_borrowing();
                if let Some(book) = book {
                    b.book_title = Some(book.title);
                }
                b
            })
            .collect();

        Ok(BorrowingListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
